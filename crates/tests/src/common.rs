use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::net::TcpListener;

/// An in-process stand-in for the school REST API.
pub struct MockApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockApi {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Number of requests served by `/api/counted`.
    pub fn counted_hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Classroom JSON as the API serves it. Every third room has no teacher;
/// rooms 1, 4, 7... are taught by Smith.
pub fn classrooms_json(count: usize) -> Value {
    let rooms: Vec<Value> = (1..=count)
        .map(|i| {
            let teacher = if i % 3 == 0 {
                Value::Null
            } else if i % 3 == 1 {
                json!({"teacherId": 100, "teacherFullName": "John Smith"})
            } else {
                json!({"teacherId": 200, "teacherFullName": "Maria Garcia"})
            };
            json!({
                "classRoomId": i,
                "classRoomName": format!("Room {i}"),
                "classTeacher": teacher,
                "students": [
                    {"studentId": i * 10 + 1, "fullName": format!("Student {i}-A")},
                    {"studentId": i * 10 + 2, "fullName": format!("Student {i}-B")}
                ]
            })
        })
        .collect();
    Value::Array(rooms)
}

pub fn teachers_json() -> Value {
    json!([
        {"teacherId": 1, "teacherName": "Ana", "teacherSurname": "Kovac", "teacherFullName": "Ana Kovac"},
        {"teacherId": 2, "teacherName": "Ivan", "teacherSurname": "Horvat", "teacherFullName": "Ivan Horvat"},
        {"teacherId": 3, "teacherName": "Marko", "teacherSurname": "Anic", "teacherFullName": "Marko Anic"}
    ])
}

async fn counted(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(teachers_json())
}

/// Bind the mock API to an ephemeral local port and serve it in the background.
pub async fn spawn_mock_api() -> MockApi {
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route("/api/classroom", get(|| async { Json(classrooms_json(25)) }))
        .route("/api/teacher", get(|| async { Json(teachers_json()) }))
        .route("/api/empty", get(|| async { Json(json!([])) }))
        .route(
            "/api/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/malformed",
            get(|| async { r#"[{"classRoomId": 1, "classRoomName": "#}),
        )
        .route(
            "/api/wrong-shape",
            get(|| async { Json(json!({"classrooms": []})) }),
        )
        .route(
            "/api/missing-students",
            get(|| async { Json(json!([{"classRoomId": 1, "classRoomName": "Room 1"}])) }),
        )
        .route("/api/counted", get(counted))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Mock API has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock API stopped");
    });

    MockApi {
        base_url: format!("http://{}", addr),
        hits,
    }
}

/// A URL on a local port that nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}/api/classroom", addr)
}
