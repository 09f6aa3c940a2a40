use shared_types::{Classroom, FetchErrorKind, FetchState, Teacher};

use crate::common::*;

#[tokio::test]
async fn server_error_is_non_success_status() {
    let api = spawn_mock_api().await;

    let err = client::api::fetch_list::<Classroom>(&api.url("/api/broken"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Status);
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn unknown_path_is_non_success_status() {
    let api = spawn_mock_api().await;

    let err = client::api::fetch_list::<Teacher>(&api.url("/api/nope"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Status);
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn truncated_json_is_parse_failure() {
    let api = spawn_mock_api().await;

    let err = client::api::fetch_list::<Classroom>(&api.url("/api/malformed"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Parse);
    assert!(err.status.is_none());
}

#[tokio::test]
async fn object_instead_of_array_is_parse_failure() {
    let api = spawn_mock_api().await;

    let err = client::api::fetch_list::<Classroom>(&api.url("/api/wrong-shape"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Parse);
}

#[tokio::test]
async fn classroom_without_students_is_parse_failure() {
    let api = spawn_mock_api().await;

    let err = client::api::fetch_list::<Classroom>(&api.url("/api/missing-students"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Parse);
}

#[tokio::test]
async fn teacher_payload_is_not_a_classroom() {
    let api = spawn_mock_api().await;

    let err = client::api::fetch_list::<Classroom>(&api.url("/api/teacher"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Parse);
}

#[tokio::test]
async fn refused_connection_is_network_failure() {
    let url = refused_url().await;

    let err = client::api::fetch_list::<Classroom>(&url).await.unwrap_err();

    assert_eq!(err.kind, FetchErrorKind::Network);
    assert!(err.status.is_none());
}

#[tokio::test]
async fn failed_classroom_fetch_becomes_failed_state() {
    let api = spawn_mock_api().await;
    let mut config = client::config::embedded_config();
    config.endpoints.classrooms = api.url("/api/broken");

    let state = FetchState::from_result(client::api::fetch_classrooms(&config).await);

    assert!(matches!(state, FetchState::Failed(ref e) if e.status == Some(500)));
    assert!(state.items().is_empty());
}
