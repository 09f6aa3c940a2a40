use dioxus::prelude::*;
use shared_ui::components::{Card, CardContent, PageHeader, PageTitle};

use crate::routes::Route;

/// Application root: entry points to the directory tables.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        div { class: "container home-page",
            PageHeader {
                PageTitle { "School Directory" }
            }
            div { class: "home-links",
                Card {
                    CardContent {
                        Link { to: Route::ClassroomList {}, class: "home-link", "Classrooms" }
                    }
                }
                Card {
                    CardContent {
                        Link { to: Route::TeacherList {}, class: "home-link", "Teachers" }
                    }
                }
            }
        }
    }
}
