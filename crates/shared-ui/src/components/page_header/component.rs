use dioxus::prelude::*;

/// Page header container holding the screen title.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Centered footer row for page-level actions below the content.
#[component]
pub fn PageFooter(children: Element) -> Element {
    rsx! {
        div { class: "page-footer", {children} }
    }
}
