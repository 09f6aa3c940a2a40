use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Copy of `config.toml` baked in at build time. Web builds have no
/// filesystem, and native builds fall back to it when the file is missing.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

pub const CLASSROOMS_ENDPOINT_VAR: &str = "CLASSROOMS_ENDPOINT";
pub const TEACHERS_ENDPOINT_VAR: &str = "TEACHERS_ENDPOINT";
pub const PAGE_SIZE_VAR: &str = "LISTING_PAGE_SIZE";

/// Resolve the configuration once and keep it for the process lifetime.
/// Safe to call multiple times; only the first call does any work.
pub fn load_app_config() -> &'static AppConfig {
    CONFIG.get_or_init(resolve)
}

/// Owned copy of the resolved configuration, for `use_context_provider`.
pub fn app_config() -> AppConfig {
    load_app_config().clone()
}

/// The configuration shipped with the build.
pub fn embedded_config() -> AppConfig {
    AppConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Embedded config.toml is invalid; endpoints left empty");
        AppConfig::default().normalized()
    })
}

/// Read a config file, falling back to [`embedded_config`] when it is
/// missing or unparseable.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_path(path: &std::path::Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => AppConfig::from_toml_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse config; using embedded defaults");
            embedded_config()
        }),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "Config file not found; using embedded defaults");
            embedded_config()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve() -> AppConfig {
    let _ = dotenvy::dotenv();
    let config = load_from_path(std::path::Path::new(CONFIG_PATH));
    let config = apply_overrides(config, |key| std::env::var(key).ok());
    tracing::info!(
        classrooms = %config.endpoints.classrooms,
        teachers = %config.endpoints.teachers,
        page_size = config.listing.page_size,
        "Loaded configuration"
    );
    config
}

#[cfg(target_arch = "wasm32")]
fn resolve() -> AppConfig {
    embedded_config()
}

/// Apply environment-style overrides from `lookup`. Empty values and
/// unparseable page sizes are ignored.
pub fn apply_overrides(mut config: AppConfig, lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(CLASSROOMS_ENDPOINT_VAR) {
        config.endpoints.classrooms = url;
    }
    if let Some(url) = non_empty(TEACHERS_ENDPOINT_VAR) {
        config.endpoints.teachers = url;
    }
    if let Some(size) = non_empty(PAGE_SIZE_VAR).and_then(|v| v.trim().parse::<usize>().ok()) {
        config.listing.page_size = size;
    }
    config.normalized()
}
