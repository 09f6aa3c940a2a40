use dioxus::prelude::*;
use shared_types::AppConfig;

mod listing;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Resolve config.toml, .env and environment overrides before the first render.
    client::config::load_app_config();

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Endpoints and listing settings are injected; screens never embed URLs.
    let config = use_context_provider::<AppConfig>(client::config::app_config);

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            classrooms = %config.endpoints.classrooms,
            teachers = %config.endpoints.teachers,
            "Starting school directory"
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
