use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{ErrorState, LoadingState};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChartSeriesVm, DashboardVm};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();

    let mut resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let stats = dashboard.stats().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(DashboardVm::from(&stats))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Dashboard" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "stat-grid",
                        for card in vm.cards {
                            div { class: "stat-card", key: "{card.label}",
                                span { class: "stat-label", "{card.label}" }
                                strong { class: "stat-value", "{card.value}" }
                            }
                        }
                    }
                    div { class: "chart-grid",
                        for chart in vm.charts {
                            BarChart { key: "{chart.title}", chart }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BarChart(chart: ChartSeriesVm) -> Element {
    rsx! {
        section { class: "chart",
            h3 { "{chart.title}" }
            if chart.bars.is_empty() {
                p { class: "empty-state", "No data" }
            } else {
                div { class: "bars",
                    for bar in chart.bars {
                        div { class: "bar", key: "{bar.label}",
                            div {
                                class: "bar-fill",
                                style: "height: {bar.height_pct:.0}%",
                                title: "{bar.value}",
                            }
                            span { class: "bar-label", "{bar.label}" }
                        }
                    }
                }
            }
        }
    }
}
