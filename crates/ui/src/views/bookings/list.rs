use dioxus::prelude::*;
use dioxus_router::Link;
use drive_core::model::ListQuery;

use crate::context::AppContext;
use crate::paths;
use crate::route_table::{Screen, allows};
use crate::views::components::{
    BOOKING_STATUS_OPTIONS, Badge, EmptyState, ErrorState, FilterSelect, LoadingState,
    PAYMENT_STATUS_OPTIONS, Pagination, SearchInput, SortHeader,
};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BookingRowVm, PageVm, map_booking_rows};

#[derive(Clone, Debug, PartialEq)]
struct BookingsData {
    rows: Vec<BookingRowVm>,
    page: PageVm,
}

#[component]
pub fn BookingListView() -> Element {
    let ctx = use_context::<AppContext>();
    let bookings = ctx.bookings();
    let can_create = allows(ctx.role(), Screen::BookingCreate);
    let mut query = use_signal(|| ListQuery::new(ctx.page_size()));

    let mut resource = use_resource(move || {
        let bookings = bookings.clone();
        let query = query();
        async move {
            let page = bookings.list_bookings(&query).await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(BookingsData {
                rows: map_booking_rows(&page.items),
                page: PageVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Bookings" }
                if can_create {
                    Link { class: "btn btn--primary", to: paths::BOOKING_NEW, "New booking" }
                }
            }
            div { class: "toolbar",
                SearchInput { placeholder: "Search by code, student or trainer", query }
                FilterSelect {
                    label: "Status",
                    filter: "status",
                    options: BOOKING_STATUS_OPTIONS,
                    query,
                }
                FilterSelect {
                    label: "Payment",
                    filter: "payment_status",
                    options: PAYMENT_STATUS_OPTIONS,
                    query,
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        EmptyState {}
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Code" }
                                    SortHeader { label: "Student", column: "student_name", query }
                                    SortHeader { label: "Trainer", column: "trainer_name", query }
                                    th { "Package" }
                                    th { "Status" }
                                    th { "Payment" }
                                    SortHeader { label: "Total", column: "total", query }
                                    SortHeader { label: "Created", column: "created_at", query }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.id}",
                                        td { Link { to: row.href.clone(), "{row.code}" } }
                                        td { "{row.student}" }
                                        td { "{row.trainer}" }
                                        td { "{row.package}" }
                                        td { Badge { badge: row.status } }
                                        td { Badge { badge: row.payment } }
                                        td { "{row.total}" }
                                        td { "{row.created_at}" }
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
