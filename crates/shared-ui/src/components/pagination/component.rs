use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page-number pagination controls with Previous/Next buttons.
///
/// `page` is 1-based. Both buttons stay visible and are disabled at their
/// boundary; with zero pages the pager reads "Page 1 of 0" and Next is
/// disabled too.
#[component]
pub fn Pagination(
    page: usize,
    total_pages: usize,
    on_previous: EventHandler<MouseEvent>,
    on_next: EventHandler<MouseEvent>,
) -> Element {
    let at_first = page <= 1;
    let at_last = page >= total_pages;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "pagination",
            "data-first": if at_first { "true" } else { "false" },
            "data-last": if at_last { "true" } else { "false" },
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_first,
                onclick: on_previous,
                "Previous"
            }
            span { class: "pagination-info", "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: at_last,
                onclick: on_next,
                "Next"
            }
        }
    }
}
