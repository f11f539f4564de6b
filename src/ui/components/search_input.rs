use dioxus::prelude::*;

/// Search box with a submit button that turns into a spinner while searching
#[component]
pub fn SearchInput(
    query: String,
    searching: bool,
    on_submit: EventHandler<()>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        form {
            class: "search-input",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                on_submit.call(());
            },
            input {
                class: "search-input-field",
                r#type: "text",
                placeholder: "Search movies...",
                value: "{query}",
                oninput: move |event: FormEvent| on_change.call(event.value()),
            }
            button {
                class: "search-input-button",
                r#type: "submit",
                disabled: searching,
                if searching {
                    div { class: "spinner" }
                } else {
                    "Search"
                }
            }
        }
    }
}
