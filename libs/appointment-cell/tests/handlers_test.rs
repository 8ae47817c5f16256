use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::{appointment_routes, AppointmentService};
use auth_cell::{IdentityService, MemorySessionStore};
use shared_database::InMemoryDirectory;
use shared_models::account::Role;
use shared_utils::test_utils::{SEED_CARDIOLOGIST_EMAIL, SEED_PATIENT_JOHN_EMAIL, TEST_PASSWORD};

const PATIENT_KEY: &str = "patient-session";
const DOCTOR_KEY: &str = "doctor-session";
const OTHER_DOCTOR_KEY: &str = "other-doctor-session";

async fn create_router() -> Router {
    let directory = Arc::new(InMemoryDirectory::seeded());
    let identity = Arc::new(IdentityService::new(
        directory.clone(),
        Arc::new(MemorySessionStore::new()),
    ));

    identity
        .authenticate(PATIENT_KEY, SEED_PATIENT_JOHN_EMAIL, TEST_PASSWORD, Role::Patient)
        .await
        .unwrap();
    identity
        .authenticate(DOCTOR_KEY, SEED_CARDIOLOGIST_EMAIL, TEST_PASSWORD, Role::Doctor)
        .await
        .unwrap();
    identity
        .authenticate(OTHER_DOCTOR_KEY, "david.kim@hospital.com", TEST_PASSWORD, Role::Doctor)
        .await
        .unwrap();

    appointment_routes(Arc::new(AppointmentService::new(directory)), identity)
}

async fn send(
    router: Router,
    method: Method,
    uri: &str,
    key: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", key));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_list_requires_session() {
    let router = create_router().await;

    let (status, body) = send(router.clone(), Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized: Missing authorization header");

    let (status, _) = send(router, Method::GET, "/", Some("unknown"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_returns_callers_appointments_with_filters() {
    let router = create_router().await;

    let (status, body) = send(router.clone(), Method::GET, "/", Some(PATIENT_KEY), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(router.clone(), Method::GET, "/?status=all", Some(PATIENT_KEY), None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(
        router.clone(),
        Method::GET,
        "/?status=cancelled&date=2024-09-20",
        Some(PATIENT_KEY),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "3");

    let (status, _) = send(router, Method::GET, "/?date=yesterday", Some(PATIENT_KEY), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_route() {
    let router = create_router().await;

    let (status, body) = send(router, Method::GET, "/stats", Some(DOCTOR_KEY), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 1, "pending": 1, "completed": 0, "cancelled": 0 }));
}

#[tokio::test]
async fn test_slots_route_is_public() {
    let router = create_router().await;

    let (status, body) = send(router, Method::GET, "/slots", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slots"].as_array().unwrap().len(), 12);
    assert_eq!(body["slots"][0], "09:00");
    assert_eq!(body["slots"][11], "16:30");
}

#[tokio::test]
async fn test_patient_books_for_themselves() {
    let router = create_router().await;
    let request = json!({ "doctor_id": "1", "appointment_date": "2024-09-15T10:00:00Z" });

    let (status, body) = send(router.clone(), Method::POST, "/", Some(PATIENT_KEY), Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patient_id"], "7");
    assert_eq!(body["doctor_name"], "Dr. Sarah Johnson");
    assert_eq!(body["status"], "pending");

    let (status, _) = send(router.clone(), Method::POST, "/", Some(DOCTOR_KEY), Some(request)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let unknown = json!({ "doctor_id": "404", "appointment_date": "2024-09-15T10:00:00Z" });
    let (status, _) = send(router, Method::POST, "/", Some(PATIENT_KEY), Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_status_by_participant() {
    let router = create_router().await;

    let (status, _) = send(
        router.clone(),
        Method::PATCH,
        "/1/status",
        Some(OTHER_DOCTOR_KEY),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        router.clone(),
        Method::PATCH,
        "/1/status",
        Some(DOCTOR_KEY),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");

    let (status, body) = send(
        router.clone(),
        Method::PATCH,
        "/1/status",
        Some(PATIENT_KEY),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("completed"));

    let (status, _) = send(
        router,
        Method::PATCH,
        "/missing/status",
        Some(PATIENT_KEY),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
