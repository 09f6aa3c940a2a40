//! One-shot list fetches against the school REST API.

use serde::de::DeserializeOwned;
use shared_types::{AppConfig, Classroom, FetchError, Teacher};

/// GET `endpoint` and decode the body as a JSON array of `T`.
///
/// Transport errors map to `Network`, non-2xx answers to `Status`, and a
/// body that is not a JSON array of `T` to `Parse`. Failures are logged
/// here; callers only decide what to show.
#[tracing::instrument(level = "debug")]
pub async fn fetch_list<T: DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, FetchError> {
    match request_list(endpoint).await {
        Ok(items) => {
            tracing::debug!(endpoint = endpoint, count = items.len(), "Fetched list");
            Ok(items)
        }
        Err(e) => {
            tracing::error!(error = %e, endpoint = endpoint, "Failed to fetch list");
            Err(e)
        }
    }
}

async fn request_list<T: DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, FetchError> {
    let client = reqwest::Client::new();
    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| FetchError::network(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unexpected status");
        return Err(FetchError::status(status.as_u16(), reason));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::network(format!("Failed to read body: {}", e)))?;

    Ok(serde_json::from_str::<Vec<T>>(&body)?)
}

pub async fn fetch_classrooms(config: &AppConfig) -> Result<Vec<Classroom>, FetchError> {
    fetch_list(&config.endpoints.classrooms).await
}

pub async fn fetch_teachers(config: &AppConfig) -> Result<Vec<Teacher>, FetchError> {
    fetch_list(&config.endpoints.teachers).await
}
