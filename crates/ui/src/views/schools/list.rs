use dioxus::prelude::*;
use dioxus_router::Link;
use drive_core::model::{ListQuery, School};
use services::{Notice, SchoolForm, ToNotices};

use super::form::SchoolFormFields;
use crate::context::AppContext;
use crate::views::components::{
    Badge, EmptyState, ErrorState, LoadingState, Pagination, SearchInput, SortHeader,
};
use crate::views::toast::use_toasts;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PageVm, SchoolRowVm};

#[derive(Clone, Debug, PartialEq)]
struct SchoolsData {
    schools: Vec<School>,
    page: PageVm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowMode {
    Read,
    Edit,
    Saving,
}

#[component]
pub fn SchoolListView() -> Element {
    let ctx = use_context::<AppContext>();
    let schools = ctx.schools();
    let mut query = use_signal(|| ListQuery::new(ctx.page_size()));

    let mut resource = use_resource(move || {
        let schools = schools.clone();
        let query = query();
        async move {
            let page = schools.list_schools(&query).await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(SchoolsData {
                schools: page.items.clone(),
                page: PageVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Schools" }
                SearchInput { placeholder: "Search schools", query }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(data) => rsx! {
                    if data.schools.is_empty() {
                        EmptyState {}
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    SortHeader { label: "Name", column: "name", query }
                                    th { "Email" }
                                    th { "Phone" }
                                    SortHeader { label: "Trainers", column: "trainers_count", query }
                                    th { "Status" }
                                    th {}
                                }
                            }
                            tbody {
                                for school in data.schools {
                                    SchoolRow {
                                        key: "{school.id}",
                                        school,
                                        on_saved: move |()| resource.restart(),
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        page: data.page,
                        on_page: move |page| query.write().set_page(page),
                        on_limit: move |limit| query.write().set_limit(limit),
                    }
                },
            }
        }
    }
}

/// One table row that toggles between read and inline-edit mode.
#[component]
fn SchoolRow(school: School, on_saved: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let schools = ctx.schools();
    let mut toasts = use_toasts();
    let school_id = school.id;

    let mut mode = use_signal(|| RowMode::Read);
    let mut form = use_signal(|| SchoolForm::from_school(&school));

    let on_save = use_callback(move |()| {
        let schools = schools.clone();
        let submitted = form();
        spawn(async move {
            mode.set(RowMode::Saving);
            match schools.update_school(school_id, &submitted).await {
                Ok(_) => {
                    toasts.push(Notice::success("School updated"));
                    mode.set(RowMode::Read);
                    on_saved.call(());
                }
                Err(err) => {
                    toasts.push_all(err.to_notices());
                    mode.set(RowMode::Edit);
                }
            }
        });
    });

    let row = SchoolRowVm::from(&school);
    let seed = SchoolForm::from_school(&school);
    let saving = mode() == RowMode::Saving;

    if mode() == RowMode::Read {
        return rsx! {
            tr {
                td { Link { to: row.href.clone(), "{row.name}" } }
                td { "{row.email}" }
                td { "{row.phone}" }
                td { "{row.trainers}" }
                td { Badge { badge: row.active } }
                td {
                    button {
                        r#type: "button",
                        class: "btn btn--small",
                        onclick: move |_| {
                            form.set(seed.clone());
                            mode.set(RowMode::Edit);
                        },
                        "Edit"
                    }
                }
            }
        };
    }

    rsx! {
        tr { class: "row--editing",
            td { colspan: "6",
                form {
                    class: "form form--inline",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        on_save.call(());
                    },
                    SchoolFormFields { form }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary",
                        disabled: saving,
                        if saving { "Saving..." } else { "Save" }
                    }
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: saving,
                        onclick: move |_| mode.set(RowMode::Read),
                        "Cancel"
                    }
                }
            }
        }
    }
}
