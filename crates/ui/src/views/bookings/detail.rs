use dioxus::prelude::*;
use dioxus_router::Link;
use drive_core::model::{BookingDecision, BookingId};
use services::{Notice, ToNotices};

use crate::context::AppContext;
use crate::paths;
use crate::views::components::{Badge, ErrorState, LoadingState};
use crate::views::toast::use_toasts;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::BookingDetailVm;

#[component]
pub fn BookingDetailView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let bookings = ctx.bookings();
    let bookings_for_decide = bookings.clone();
    let booking_id = BookingId::new(id);
    let mut toasts = use_toasts();
    let mut deciding = use_signal(|| false);

    let mut resource = use_resource(use_reactive!(|booking_id| {
        let bookings = bookings.clone();
        async move {
            let detail = bookings
                .get_booking(booking_id)
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(BookingDetailVm::from(&detail))
        }
    }));
    let state = view_state_from_resource(&resource);

    let decide = use_callback(move |decision: BookingDecision| {
        let bookings = bookings_for_decide.clone();
        spawn(async move {
            deciding.set(true);
            match bookings.decide(booking_id, decision).await {
                Ok(()) => {
                    let text = match decision {
                        BookingDecision::Accept => "Booking accepted",
                        BookingDecision::Reject => "Booking rejected",
                    };
                    toasts.push(Notice::success(text));
                    resource.restart();
                }
                Err(err) => toasts.push_all(err.to_notices()),
            }
            deciding.set(false);
        });
    });

    rsx! {
        div { class: "page",
            Link { class: "back-link", to: paths::BOOKINGS, "All bookings" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "page-header",
                        h2 { "Booking {vm.row.code}" }
                        Badge { badge: vm.row.status.clone() }
                        Badge { badge: vm.row.payment.clone() }
                    }
                    dl { class: "details",
                        dt { "Student" }
                        dd { "{vm.row.student}" }
                        dt { "Trainer" }
                        dd { "{vm.row.trainer}" }
                        dt { "Package" }
                        dd { "{vm.row.package}" }
                        dt { "Total" }
                        dd { "{vm.row.total}" }
                        dt { "Pickup" }
                        dd { "{vm.pickup}" }
                        dt { "Created" }
                        dd { "{vm.row.created_at}" }
                    }
                    h3 { "Sessions" }
                    if vm.sessions.is_empty() {
                        p { class: "empty-state", "No data" }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Slot" }
                                    th { "Start" }
                                    th { "End" }
                                }
                            }
                            tbody {
                                for session in vm.sessions {
                                    tr { key: "{session.label}",
                                        td { "{session.label}" }
                                        td { "{session.start}" }
                                        td { "{session.end}" }
                                    }
                                }
                            }
                        }
                    }
                    if vm.decidable {
                        div { class: "actions",
                            button {
                                r#type: "button",
                                class: "btn btn--primary",
                                disabled: deciding(),
                                onclick: move |_| decide.call(BookingDecision::Accept),
                                "Accept"
                            }
                            button {
                                r#type: "button",
                                class: "btn btn--danger",
                                disabled: deciding(),
                                onclick: move |_| decide.call(BookingDecision::Reject),
                                "Reject"
                            }
                        }
                    }
                },
            }
        }
    }
}
