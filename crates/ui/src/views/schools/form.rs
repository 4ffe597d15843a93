use dioxus::prelude::*;
use services::SchoolForm;

/// Editable fields of a school, bound to `form`.
#[component]
pub fn SchoolFormFields(form: Signal<SchoolForm>) -> Element {
    rsx! {
        label { "Name"
            input {
                value: "{form.read().name}",
                oninput: move |evt| form.write().name = evt.value(),
            }
        }
        label { "Email"
            input {
                r#type: "email",
                value: "{form.read().email}",
                oninput: move |evt| form.write().email = evt.value(),
            }
        }
        label { "Phone"
            input {
                value: "{form.read().phone}",
                oninput: move |evt| form.write().phone = evt.value(),
            }
        }
        label { "Address"
            textarea {
                value: "{form.read().address}",
                oninput: move |evt| form.write().address = evt.value(),
            }
        }
        label { class: "checkbox",
            input {
                r#type: "checkbox",
                checked: form.read().is_active,
                onchange: move |evt| form.write().is_active = evt.checked(),
            }
            "Active"
        }
    }
}
