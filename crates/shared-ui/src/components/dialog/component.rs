use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

use crate::components::button::{Button, ButtonVariant};

/// Open modal with a title, a body and a Close action.
///
/// The parent decides visibility by rendering it or not. Dismissing it
/// from the overlay or with Close calls `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "dialog-overlay",
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            prim::DialogContent { class: "dialog-content".to_string(),
                prim::DialogTitle { class: "dialog-title", "{title}" }
                div { class: "dialog-body", {children} }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
