#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use drive_core::model::ListQuery;
use drive_core::{BookingWizard, WizardStep};
use services::{Notice, ToNotices};

use super::steps::{PackageStep, PickupStep, SessionsStep, StudentStep, TrainerStep};
use crate::context::AppContext;
use crate::paths;
use crate::views::ViewError;
use crate::views::toast::use_toasts;
use crate::vm::map_steps;

pub const BOOKING_CREATED: &str = "Booking created successfully";
const PACKAGE_LIMIT: u32 = 100;

#[component]
pub fn BookingCreateView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let bookings = ctx.bookings();
    let navigator = use_navigator();
    let mut toasts = use_toasts();
    let mut wizard = use_signal(BookingWizard::new);
    let mut submitting = use_signal(|| false);

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<WizardTestHandles>() {
            handles.register(wizard);
        }
    });

    let trainer = use_memo(move || wizard.read().trainer_user_id());
    let mut packages = use_resource(move || {
        let directory = directory.clone();
        let trainer = trainer();
        async move {
            let Some(user_id) = trainer else {
                return (None, Ok(Vec::new()));
            };
            let result = directory
                .list_trainer_packages(user_id, &ListQuery::new(PACKAGE_LIMIT))
                .await
                .map(|page| page.items)
                .map_err(ViewError::from);
            (trainer, result)
        }
    });

    use_effect(move || {
        if let Some((Some(trainer), Ok(items))) = &*packages.read() {
            wizard.write().set_package_count(*trainer, items.len());
        }
    });

    // A result fetched for another trainer is still "loading" for this one.
    let package_list = use_memo(move || match &*packages.read() {
        Some((fetched_for, result)) if *fetched_for == trainer() => Some(result.clone()),
        _ => None,
    });

    let on_submit = use_callback(move |()| {
        let bookings = bookings.clone();
        let snapshot = wizard.peek().clone();
        spawn(async move {
            submitting.set(true);
            match bookings.submit(&snapshot).await {
                Ok(_) => {
                    toasts.push(Notice::success(BOOKING_CREATED));
                    navigator.push(paths::BOOKINGS);
                }
                Err(err) => {
                    toasts.push_all(err.to_notices());
                    submitting.set(false);
                }
            }
        });
    });

    let step = wizard.read().step();
    let steps = map_steps(step);
    let next_disabled = wizard.read().next_disabled();
    let can_submit = wizard.read().can_submit() && !submitting();

    rsx! {
        div { class: "page",
            Link { class: "back-link", to: paths::BOOKINGS, "All bookings" }
            h2 { "New booking" }
            ol { class: "steps",
                for item in steps {
                    li { key: "{item.number}", class: item.class(),
                        span { class: "step-number", "{item.number}" }
                        "{item.title}"
                    }
                }
            }
            match step {
                WizardStep::SelectStudent => rsx! { StudentStep { wizard } },
                WizardStep::SelectTrainer => rsx! { TrainerStep { wizard } },
                WizardStep::SelectPackage => rsx! {
                    PackageStep {
                        wizard,
                        packages: package_list(),
                        on_retry: move |()| packages.restart(),
                    }
                },
                WizardStep::ScheduleSessions => rsx! { SessionsStep { wizard } },
                WizardStep::SelectPickupLocation => rsx! { PickupStep { wizard } },
            }
            div { class: "wizard-nav",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: step.prev().is_none(),
                    onclick: move |_| wizard.write().back(),
                    "Back"
                }
                if step.is_last() {
                    button {
                        r#type: "button",
                        class: "btn btn--primary",
                        disabled: !can_submit,
                        onclick: move |_| on_submit.call(()),
                        "Submit"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "btn btn--primary",
                        disabled: next_disabled,
                        onclick: move |_| {
                            wizard.write().next();
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WizardTestHandles {
    wizard: Rc<RefCell<Option<Signal<BookingWizard>>>>,
}

#[cfg(test)]
impl WizardTestHandles {
    fn register(&self, wizard: Signal<BookingWizard>) {
        *self.wizard.borrow_mut() = Some(wizard);
    }

    pub(crate) fn wizard(&self) -> Signal<BookingWizard> {
        (*self.wizard.borrow()).expect("wizard registered")
    }
}
