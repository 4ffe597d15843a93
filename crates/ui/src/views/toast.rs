use dioxus::prelude::*;
use services::{Notice, NoticeKind};

#[derive(Clone, Debug, PartialEq)]
struct ToastEntry {
    id: u64,
    notice: Notice,
}

/// Shared notification queue, provided once at the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(1),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.entries.write().push(ToastEntry { id, notice });
    }

    pub fn push_all(&mut self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.write().retain(|entry| entry.id != id);
    }

    /// Texts currently queued, oldest first.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .map(|entry| entry.notice.text.clone())
            .collect()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification queue from context; a detached one when none was provided.
#[must_use]
pub fn use_toasts() -> Toasts {
    use_hook(|| try_consume_context::<Toasts>().unwrap_or_default())
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_toasts();
    let entries = toasts.entries.read().clone();

    rsx! {
        div { class: "toast-stack",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: toast_class(entry.notice.kind),
                    role: "status",
                    span { "{entry.notice.text}" }
                    button {
                        r#type: "button",
                        class: "toast-close",
                        onclick: move |_| {
                            let mut toasts = toasts;
                            toasts.dismiss(entry.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Info => "toast toast--info",
        NoticeKind::Error => "toast toast--error",
    }
}
