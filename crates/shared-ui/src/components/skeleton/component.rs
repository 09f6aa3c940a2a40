use dioxus::prelude::*;

/// Animated placeholder lines shown while a list is loading.
#[component]
pub fn Skeleton(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading", role: "status",
            span { class: "loading-label", "Loading..." }
            for i in 0..lines {
                div { key: "{i}", class: "skeleton" }
            }
        }
    }
}
