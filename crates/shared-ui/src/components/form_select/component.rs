use dioxus::prelude::*;

/// Native `<select>` with a label, used for short fixed lists such as the
/// role picker on the sign-in screen.
///
/// `options` are `(value, label)` pairs rendered in order.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    options: Vec<(String, String)>,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
