//! One component per wizard step. Each edits the shared wizard signal.

use dioxus::prelude::*;
use drive_core::BookingWizard;
use drive_core::model::{AddressId, ListQuery, PickupMode, TrainerPackage};
use services::ToNotices;

use crate::context::AppContext;
use crate::views::components::{EmptyState, ErrorState, LoadingState, use_debounced_search};
use crate::views::toast::use_toasts;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AddressOptionVm, PackageRowVm};

const PICKER_LIMIT: u32 = 20;

#[component]
pub fn StudentStep(mut wizard: Signal<BookingWizard>) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let query = use_signal(|| ListQuery::new(PICKER_LIMIT));
    let (text, on_input) = use_debounced_search(query);
    let selected = wizard.read().student().map(|s| s.id);

    let mut resource = use_resource(move || {
        let directory = directory.clone();
        let query = query();
        async move {
            let page = directory.list_students(&query).await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(page.items)
        }
    });

    rsx! {
        div { class: "wizard-step",
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search students",
                value: "{text}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(students) => rsx! {
                    if students.is_empty() {
                        EmptyState {}
                    } else {
                        ul { class: "picker",
                            for student in students {
                                li {
                                    key: "{student.id}",
                                    class: if selected == Some(student.id) { "picker-item picker-item--selected" } else { "picker-item" },
                                    span { "{student.name}" }
                                    span { class: "muted", "{student.email}" }
                                    button {
                                        r#type: "button",
                                        class: "btn",
                                        onclick: move |_| wizard.write().select_student(student.clone()),
                                        "Select"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn TrainerStep(mut wizard: Signal<BookingWizard>) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let query = use_signal(|| ListQuery::new(PICKER_LIMIT).with_filter("is_active", "1"));
    let (text, on_input) = use_debounced_search(query);
    let selected = wizard.read().trainer_user_id();

    let mut resource = use_resource(move || {
        let directory = directory.clone();
        let query = query();
        async move {
            let page = directory.list_trainers(&query).await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(page.items)
        }
    });

    rsx! {
        div { class: "wizard-step",
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search trainers",
                value: "{text}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            match view_state_from_resource(&resource) {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(trainers) => rsx! {
                    if trainers.is_empty() {
                        EmptyState {}
                    } else {
                        ul { class: "picker",
                            for trainer in trainers {
                                li {
                                    key: "{trainer.user_id}",
                                    class: if selected == Some(trainer.user_id) { "picker-item picker-item--selected" } else { "picker-item" },
                                    span { "{trainer.name}" }
                                    span { class: "muted", {trainer.languages_label()} }
                                    button {
                                        r#type: "button",
                                        class: "btn",
                                        onclick: move |_| wizard.write().select_trainer(trainer.clone()),
                                        "Select"
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// Packages of the selected trainer; fetched by the parent view.
#[component]
pub fn PackageStep(
    mut wizard: Signal<BookingWizard>,
    packages: Option<Result<Vec<TrainerPackage>, ViewError>>,
    on_retry: EventHandler<()>,
) -> Element {
    let Some(trainer) = wizard.read().trainer_user_id() else {
        return rsx! { p { class: "muted", "Select a trainer first" } };
    };
    let selected = wizard.read().package().map(|p| p.package_id);

    match packages {
        None => rsx! { LoadingState {} },
        Some(Err(err)) => rsx! {
            ErrorState { message: err.message(), on_retry: move |()| on_retry.call(()) }
        },
        Some(Ok(items)) if items.is_empty() => rsx! {
            p { class: "empty-state", "This trainer has no packages" }
        },
        Some(Ok(items)) => rsx! {
            ul { class: "picker",
                for package in items {
                    {
                        let row = PackageRowVm::new(trainer, &package);
                        rsx! {
                            li {
                                key: "{row.id}",
                                class: if selected == Some(row.id) { "picker-item picker-item--selected" } else { "picker-item" },
                                span { "{row.title}" }
                                span { class: "muted", "{row.sessions} sessions" }
                                span { "{row.price}" }
                                button {
                                    r#type: "button",
                                    class: "btn",
                                    onclick: move |_| wizard.write().select_package(package.clone()),
                                    "Select"
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
pub fn SessionsStep(mut wizard: Signal<BookingWizard>) -> Element {
    let ctx = use_context::<AppContext>();
    let min = ctx.clock().session_input_min();
    let mut toasts = use_toasts();
    let schedule = wizard.read().sessions().clone();
    let can_remove = schedule.len() > 1;

    rsx! {
        div { class: "wizard-step",
            for (index, slot) in schedule.slots().iter().cloned().enumerate() {
                div { key: "{index}", class: "session-row",
                    span { class: "session-label", {slot.label()} }
                    label {
                        "Start"
                        input {
                            r#type: "datetime-local",
                            min: "{min}",
                            value: "{slot.start_time}",
                            oninput: move |evt| {
                                if let Err(err) = wizard.write().set_session_start(index, &evt.value()) {
                                    toasts.push_all(err.to_notices());
                                }
                            },
                        }
                    }
                    label {
                        "End"
                        input {
                            r#type: "time",
                            value: "{slot.end_time}",
                            oninput: move |evt| {
                                if let Err(err) = wizard.write().set_session_end(index, &evt.value()) {
                                    toasts.push_all(err.to_notices());
                                }
                            },
                        }
                    }
                    if can_remove {
                        button {
                            r#type: "button",
                            class: "btn btn--ghost",
                            onclick: move |_| {
                                if let Err(err) = wizard.write().remove_session(index) {
                                    toasts.push_all(err.to_notices());
                                }
                            },
                            "Remove"
                        }
                    }
                }
            }
            if schedule.can_add() {
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| {
                        if let Err(err) = wizard.write().add_session() {
                            toasts.push_all(err.to_notices());
                        }
                    },
                    "Add session"
                }
            }
        }
    }
}

#[component]
pub fn PickupStep(mut wizard: Signal<BookingWizard>) -> Element {
    let mut toasts = use_toasts();
    let mode = wizard.read().pickup_mode();
    let current = wizard.read().pickup().map(|p| p.address_id().value());
    let options: Vec<AddressOptionVm> = wizard
        .read()
        .pickup_addresses()
        .unwrap_or_default()
        .iter()
        .map(AddressOptionVm::from)
        .collect();
    let selected = current.map(|id| id.to_string()).unwrap_or_default();

    let mut switch_mode = move |mode: PickupMode| {
        if let Err(err) = wizard.write().set_pickup_mode(mode) {
            toasts.push_all(err.to_notices());
        }
    };

    rsx! {
        div { class: "wizard-step",
            label {
                input {
                    r#type: "radio",
                    name: "pickup-mode",
                    checked: mode == PickupMode::Pickup,
                    onchange: move |_| switch_mode(PickupMode::Pickup),
                }
                "Pick up the student"
            }
            label {
                input {
                    r#type: "radio",
                    name: "pickup-mode",
                    checked: mode == PickupMode::DriverLocation,
                    onchange: move |_| switch_mode(PickupMode::DriverLocation),
                }
                "Meet at the trainer's location"
            }
            if mode == PickupMode::Pickup {
                if options.is_empty() {
                    p { class: "muted", "The student has no saved addresses" }
                } else {
                    select {
                        value: "{selected}",
                        onchange: move |evt| {
                            let Ok(id) = evt.value().parse::<u64>() else {
                                return;
                            };
                            if let Err(err) = wizard.write().select_pickup_address(AddressId::new(id)) {
                                toasts.push_all(err.to_notices());
                            }
                        },
                        for option in options {
                            option { key: "{option.id}", value: "{option.id}", "{option.label} ({option.line})" }
                        }
                    }
                }
            }
        }
    }
}
