use dioxus::prelude::*;
use dioxus_router::Link;
use drive_core::model::{ListQuery, PackageId, TrainerUserId};

use crate::context::AppContext;
use crate::paths;
use crate::views::components::{EmptyState, ErrorState, LoadingState, Pagination};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PackageRowVm, PageVm, map_package_rows};

/// Trainers offered in the picker; package lists are per trainer.
const TRAINER_PICKER_LIMIT: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
struct PackagesData {
    rows: Vec<PackageRowVm>,
    page: PageVm,
}

#[component]
pub fn PackageListView() -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let directory_for_packages = directory.clone();
    let mut selected = use_signal(|| None::<TrainerUserId>);
    let mut query = use_signal(|| ListQuery::new(ctx.page_size()));

    let trainers = use_resource(move || {
        let directory = directory.clone();
        async move {
            directory
                .list_trainers(&ListQuery::new(TRAINER_PICKER_LIMIT))
                .await
                .map(|page| page.items)
                .map_err(ViewError::from)
        }
    });

    // Default the picker to the first trainer once the list arrives.
    use_effect(move || {
        let first = trainers
            .value()
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .and_then(|items| items.first().map(|t| t.user_id));
        if selected.peek().is_none() && first.is_some() {
            selected.set(first);
        }
    });

    let mut packages = use_resource(move || {
        let directory = directory_for_packages.clone();
        let trainer = selected();
        let query = query();
        async move {
            let Some(trainer) = trainer else {
                return Ok(None);
            };
            let page = directory
                .list_trainer_packages(trainer, &query)
                .await
                .map_err(ViewError::from)?;
            Ok::<_, ViewError>(Some(PackagesData {
                rows: map_package_rows(trainer, &page.items),
                page: PageVm::from(&page),
            }))
        }
    });
    let state = view_state_from_resource(&packages);
    let trainer_options = trainers
        .value()
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .cloned()
        .unwrap_or_default();
    let selected_value = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Packages" }
                label { class: "filter",
                    "Trainer"
                    select {
                        value: "{selected_value}",
                        onchange: move |evt| {
                            let parsed = evt.value().parse::<TrainerUserId>().ok();
                            selected.set(parsed);
                            query.write().set_page(1);
                        },
                        for trainer in trainer_options {
                            option {
                                key: "{trainer.user_id}",
                                value: "{trainer.user_id}",
                                selected: selected_value == trainer.user_id.to_string(),
                                "{trainer.name}"
                            }
                        }
                    }
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| packages.restart() }
                },
                ViewState::Ready(None) => rsx! { EmptyState {} },
                ViewState::Ready(Some(data)) => rsx! {
                    if data.rows.is_empty() {
                        EmptyState {}
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Package" }
                                    th { "Sessions" }
                                    th { "Slots" }
                                    th { "Price" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.id}",
                                        td { Link { to: row.href.clone(), "{row.title}" } }
                                        td { "{row.sessions}" }
                                        td { "{row.slots}" }
                                        td { "{row.price}" }
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

#[component]
pub fn PackageDetailView(trainer: u64, package: u64, slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let directory = ctx.directory();
    let trainer = TrainerUserId::new(trainer);
    let package_id = PackageId::new(package);

    let mut resource = use_resource(use_reactive!(|(trainer, package_id)| {
        let directory = directory.clone();
        async move {
            let page = directory
                .list_trainer_packages(trainer, &ListQuery::new(TRAINER_PICKER_LIMIT))
                .await
                .map_err(ViewError::from)?;
            page.items
                .iter()
                .find(|p| p.package_id == package_id)
                .map(|p| PackageRowVm::new(trainer, p))
                .ok_or(ViewError::NotFound)
        }
    }));
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page", "data-slug": "{slug}",
            Link { class: "back-link", to: paths::PACKAGES, "All packages" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! { LoadingState {} },
                ViewState::Error(err) => rsx! {
                    ErrorState { message: err.message(), on_retry: move |()| resource.restart() }
                },
                ViewState::Ready(row) => rsx! {
                    h2 { "{row.title}" }
                    if !row.description.is_empty() {
                        p { class: "description", "{row.description}" }
                    }
                    dl { class: "details",
                        dt { "Sessions" }
                        dd { "{row.sessions}" }
                        dt { "Booking slots" }
                        dd { "{row.slots}" }
                        dt { "Price" }
                        dd { "{row.price}" }
                    }
                },
            }
        }
    }
}
