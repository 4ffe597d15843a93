use dioxus::prelude::*;
use drive_core::model::{ListQuery, PAGE_SIZE_OPTIONS, SortDirection};
use services::{RequestSequencer, SEARCH_DEBOUNCE};

use crate::vm::{BadgeVm, PageVm};

#[component]
pub fn Badge(badge: BadgeVm) -> Element {
    rsx! {
        span { class: "{badge.class}", "{badge.label}" }
    }
}

#[component]
pub fn EmptyState() -> Element {
    rsx! {
        p { class: "empty-state", "No data" }
    }
}

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        p { class: "loading", "Loading..." }
    }
}

#[component]
pub fn ErrorState(message: &'static str, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-state",
            p { "{message}" }
            button {
                r#type: "button",
                class: "btn",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[component]
pub fn Pagination(
    page: PageVm,
    on_page: EventHandler<u32>,
    on_limit: EventHandler<u32>,
) -> Element {
    let current = page.page;
    rsx! {
        div { class: "pagination",
            span { class: "pagination-range", "{page.range_label}" }
            label { class: "pagination-size",
                "Rows per page"
                select {
                    value: "{page.limit}",
                    onchange: move |evt| {
                        if let Ok(limit) = evt.value().parse::<u32>() {
                            on_limit.call(limit);
                        }
                    },
                    for option in PAGE_SIZE_OPTIONS {
                        option { value: "{option}", selected: option == page.limit, "{option}" }
                    }
                }
            }
            button {
                r#type: "button",
                class: "btn",
                disabled: !page.has_prev,
                onclick: move |_| on_page.call(current.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "pagination-page", "Page {page.page} of {page.page_count}" }
            button {
                r#type: "button",
                class: "btn",
                disabled: !page.has_next,
                onclick: move |_| on_page.call(current + 1),
                "Next"
            }
        }
    }
}

/// Column header that toggles sorting on click.
#[component]
pub fn SortHeader(label: &'static str, column: &'static str, query: Signal<ListQuery>) -> Element {
    let marker = match query.read().sort.as_ref() {
        Some(sort) if sort.column == column => match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    };
    rsx! {
        th {
            class: "sortable",
            onclick: move |_| {
                let mut query = query;
                query.write().sort_by(column);
            },
            "{label}{marker}"
        }
    }
}

/// Search box whose term reaches `query` only after typing pauses.
#[component]
pub fn SearchInput(placeholder: &'static str, query: Signal<ListQuery>) -> Element {
    let (text, on_input) = use_debounced_search(query);
    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder,
            value: "{text}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}

/// Debounced search wiring: returns the live input text and its input handler.
///
/// Each keystroke supersedes the previous one; only the last term that
/// survives `SEARCH_DEBOUNCE` is written into the query.
pub fn use_debounced_search(query: Signal<ListQuery>) -> (Signal<String>, Callback<String>) {
    let mut text = use_signal(|| query.peek().search.clone());
    let sequencer = use_hook(RequestSequencer::new);
    let on_input = use_callback(move |value: String| {
        text.set(value.clone());
        let ticket = sequencer.issue();
        let mut query = query;
        spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            if ticket.is_current() && query.peek().search != value {
                query.write().set_search(value);
            }
        });
    });
    (text, on_input)
}

/// Drop-down bound to one query filter; the empty option clears it.
#[component]
pub fn FilterSelect(
    label: &'static str,
    filter: &'static str,
    options: &'static [(&'static str, &'static str)],
    query: Signal<ListQuery>,
) -> Element {
    let current = query.read().filters.get(filter).cloned().unwrap_or_default();
    rsx! {
        label { class: "filter",
            "{label}"
            select {
                value: "{current}",
                onchange: move |evt| {
                    let mut query = query;
                    query.write().set_filter(filter, evt.value());
                },
                option { value: "", "All" }
                for (value, text) in options.iter().copied() {
                    option { value, selected: current == value, "{text}" }
                }
            }
        }
    }
}

pub const BOOKING_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("PENDING", "Pending"),
    ("ACCEPTED", "Accepted"),
    ("REJECTED", "Rejected"),
    ("CANCELLED", "Cancelled"),
    ("COMPLETED", "Completed"),
];

pub const PAYMENT_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("PENDING", "Pending"),
    ("PAID", "Paid"),
    ("FAILED", "Failed"),
    ("REFUNDED", "Refunded"),
];
