use dioxus::prelude::*;
use drive_core::model::ListQuery;

use crate::context::AppContext;
use crate::views::components::{
    Badge, EmptyState, ErrorState, FilterSelect, LoadingState, PAYMENT_STATUS_OPTIONS,
    Pagination,
};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PageVm, PayoutRowVm};

#[derive(Clone, Debug, PartialEq)]
struct PayoutsData {
    rows: Vec<PayoutRowVm>,
    page: PageVm,
}

#[component]
pub fn PayoutListView() -> Element {
    let ctx = use_context::<AppContext>();
    let payouts = ctx.payouts();
    let mut query = use_signal(|| ListQuery::new(ctx.page_size()));

    let mut resource = use_resource(move || {
        let payouts = payouts.clone();
        let query = query();
        async move {
            let page = payouts.list_payouts(&query).await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(PayoutsData {
                rows: page.items.iter().map(PayoutRowVm::from).collect(),
                page: PageVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Payouts" }
                FilterSelect {
                    label: "Status",
                    filter: "status",
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
                                    th { "#" }
                                    th { "Trainer" }
                                    th { "Amount" }
                                    th { "Status" }
                                    th { "Requested" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.id}",
                                        td { "{row.id}" }
                                        td { "{row.trainer}" }
                                        td { "{row.amount}" }
                                        td { Badge { badge: row.status } }
                                        td { "{row.requested_at}" }
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
