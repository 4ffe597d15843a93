use dioxus::prelude::*;
use dioxus_router::Link;
use drive_core::model::{School, SchoolId};
use services::{Notice, SchoolForm, ToNotices};

use super::form::SchoolFormFields;
use crate::context::AppContext;
use crate::paths;
use crate::views::components::{Badge, ErrorState, LoadingState};
use crate::views::toast::use_toasts;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::BadgeVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SchoolTab {
    Overview,
    Edit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
}

#[component]
pub fn SchoolDetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let schools = ctx.schools();
    let schools_for_save = schools.clone();
    let school_id = SchoolId::new(id);
    let mut toasts = use_toasts();

    let mut tab = use_signal(|| SchoolTab::Overview);
    let mut form = use_signal(SchoolForm::default);
    let mut save_state = use_signal(|| SaveState::Idle);

    let mut resource = use_resource(use_reactive!(|school_id| {
        let schools = schools.clone();
        async move {
            schools
                .get_school(school_id)
                .await
                .map_err(ViewError::from)
        }
    }));
    let state = view_state_from_resource(&resource);

    // Reset the form whenever a (re)loaded record arrives.
    use_effect(move || {
        let loaded = resource
            .value()
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(SchoolForm::from_school);
        if let Some(loaded) = loaded {
            form.set(loaded);
        }
    });

    let on_save = use_callback(move |()| {
        let schools = schools_for_save.clone();
        let submitted = form();
        spawn(async move {
            save_state.set(SaveState::Saving);
            match schools.update_school(school_id, &submitted).await {
                Ok(_) => {
                    toasts.push(Notice::success("School updated"));
                    tab.set(SchoolTab::Overview);
                    resource.restart();
                }
                Err(err) => toasts.push_all(err.to_notices()),
            }
            save_state.set(SaveState::Idle);
        });
    });

    rsx! {
        div { class: "page",
            Link { class: "back-link", to: paths::SCHOOLS, "All schools" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(school) => rsx! {
                    h2 { "{school.name}" }
                    div { class: "tabs", role: "tablist",
                        button {
                            r#type: "button",
                            class: if tab() == SchoolTab::Overview { "tab tab--active" } else { "tab" },
                            onclick: move |_| tab.set(SchoolTab::Overview),
                            "Overview"
                        }
                        button {
                            r#type: "button",
                            class: if tab() == SchoolTab::Edit { "tab tab--active" } else { "tab" },
                            onclick: move |_| tab.set(SchoolTab::Edit),
                            "Edit"
                        }
                    }
                    match tab() {
                        SchoolTab::Overview => rsx! { SchoolOverview { school } },
                        SchoolTab::Edit => rsx! {
                            form {
                                class: "form",
                                onsubmit: move |evt| {
                                    evt.prevent_default();
                                    on_save.call(());
                                },
                                SchoolFormFields { form }
                                button {
                                    r#type: "submit",
                                    class: "btn btn--primary",
                                    disabled: save_state() == SaveState::Saving,
                                    if save_state() == SaveState::Saving { "Saving..." } else { "Save" }
                                }
                            }
                        },
                    }
                },
            }
        }
    }
}

#[component]
fn SchoolOverview(school: School) -> Element {
    let email = school.email.clone().unwrap_or_else(|| "-".into());
    let phone = school.phone.clone().unwrap_or_else(|| "-".into());
    let address = school.address.clone().unwrap_or_else(|| "-".into());
    rsx! {
        dl { class: "details",
            dt { "Status" }
            dd { Badge { badge: BadgeVm::active(school.is_active) } }
            dt { "Email" }
            dd { "{email}" }
            dt { "Phone" }
            dd { "{phone}" }
            dt { "Address" }
            dd { "{address}" }
            dt { "Trainers" }
            dd { "{school.trainers_count}" }
        }
        if let Some(logo) = school.logo_url.clone() {
            img { class: "school-logo", src: "{logo}", alt: "{school.name} logo" }
        }
    }
}
