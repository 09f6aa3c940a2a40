use dioxus::prelude::*;

use crate::components::input::Input;

/// Live search box. `on_search` fires on every keystroke with the full
/// query text; there is no submit button and no debouncing.
#[component]
pub fn SearchBar(
    query: String,
    #[props(default)] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            Input {
                value: query,
                placeholder: placeholder,
                input_type: "search",
                on_input: on_search,
            }
        }
    }
}
