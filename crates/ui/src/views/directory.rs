use dioxus::prelude::*;
use drive_core::model::ListQuery;

use crate::context::AppContext;
use crate::views::components::{
    Badge, EmptyState, ErrorState, LoadingState, Pagination, SearchInput, SortHeader,
};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PageVm, StudentRowVm, TrainerRowVm};

#[derive(Clone, Debug, PartialEq)]
struct StudentsData {
    rows: Vec<StudentRowVm>,
    page: PageVm,
}

#[component]
pub fn StudentListView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let mut query = use_signal(|| ListQuery::new(ctx.page_size()));

    let mut resource = use_resource(move || {
        let directory = directory.clone();
        let query = query();
        async move {
            let page = directory
                .list_students(&query)
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(StudentsData {
                rows: page.items.iter().map(StudentRowVm::from).collect(),
                page: PageVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Students" }
                SearchInput { placeholder: "Search by name or email", query }
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
                                    SortHeader { label: "Name", column: "name", query }
                                    SortHeader { label: "Email", column: "email", query }
                                    th { "Phone" }
                                    th { "Pickup addresses" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.id}",
                                        td { "{row.name}" }
                                        td { "{row.email}" }
                                        td { "{row.phone}" }
                                        td { "{row.addresses}" }
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

#[derive(Clone, Debug, PartialEq)]
struct TrainersData {
    rows: Vec<TrainerRowVm>,
    page: PageVm,
}

#[component]
pub fn TrainerListView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let mut query = use_signal(|| ListQuery::new(ctx.page_size()));
    let active_only = query.read().filters.contains_key("is_active");

    let mut resource = use_resource(move || {
        let directory = directory.clone();
        let query = query();
        async move {
            let page = directory
                .list_trainers(&query)
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(TrainersData {
                rows: page.items.iter().map(TrainerRowVm::from).collect(),
                page: PageVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Trainers" }
                SearchInput { placeholder: "Search by name, email or license", query }
                label { class: "filter",
                    input {
                        r#type: "checkbox",
                        checked: active_only,
                        onchange: move |evt| {
                            let value = if evt.checked() { "1" } else { "" };
                            query.write().set_filter("is_active", value);
                        },
                    }
                    "Active only"
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
                                    SortHeader { label: "Name", column: "name", query }
                                    th { "Email" }
                                    th { "License" }
                                    th { "Gear" }
                                    th { "Languages" }
                                    th { "Vehicle" }
                                    th { "Status" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.user_id}",
                                        td { "{row.name}" }
                                        td { "{row.email}" }
                                        td { "{row.license}" }
                                        td { "{row.gear}" }
                                        td { "{row.languages}" }
                                        td { "{row.vehicle}" }
                                        td { Badge { badge: row.active } }
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
