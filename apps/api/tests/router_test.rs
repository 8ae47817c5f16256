use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_cell::MemorySessionStore;
use medibook_api::{create_router, AppState};
use shared_config::AppConfig;
use shared_database::InMemoryDirectory;
use shared_utils::test_utils::{TestConfig, TestUser, TEST_PASSWORD};

fn create_app() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryDirectory::seeded()),
        Arc::new(MemorySessionStore::new()),
        6,
    );
    create_router(&state)
}

async fn call(
    app: &Router,
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

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

#[tokio::test]
async fn test_liveness() {
    let app = create_app();

    let (status, body) = call(&app, Method::GET, "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "MediBook API is running!");
}

#[tokio::test]
async fn test_register_book_and_complete_flow() {
    let app = create_app();
    let patient = TestUser::patient("Flow Patient");

    let (status, body) = call(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!(patient.to_register_data())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let patient_key = body["session_key"].as_str().unwrap().to_string();
    let patient_id = body["account"]["id"].as_str().unwrap().to_string();

    let (status, doctors) = call(&app, Method::GET, "/doctors?term=chen", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let doctor_id = doctors["items"][0]["id"].as_str().unwrap().to_string();

    let (status, appointment) = call(
        &app,
        Method::POST,
        "/appointments",
        Some(&patient_key),
        Some(json!({ "doctor_id": doctor_id, "appointment_date": "2024-11-04T09:30:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(appointment["patient_id"], patient_id.as_str());
    assert_eq!(appointment["doctor_specialization"], "Neurologist");

    let (_, login) = call(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({
            "email": "michael.chen@hospital.com",
            "password": TEST_PASSWORD,
            "role": "doctor",
        })),
    )
    .await;
    let doctor_key = login["session_key"].as_str().unwrap().to_string();

    let uri = format!("/appointments/{}/status", appointment["id"].as_str().unwrap());
    let (status, updated) = call(
        &app,
        Method::PATCH,
        &uri,
        Some(&doctor_key),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");

    let (_, stats) = call(&app, Method::GET, "/appointments/stats", Some(&patient_key), None).await;
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["completed"], 1);

    let (status, _) = call(&app, Method::POST, "/auth/logout", Some(&patient_key), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, Method::GET, "/appointments", Some(&patient_key), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_state_from_config_respects_seed_flag() {
    let config = AppConfig {
        seed_directory: false,
        ..TestConfig::default().to_app_config()
    };
    let app = create_router(&AppState::from_config(&config));

    let (status, body) = call(&app, Method::GET, "/doctors", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}
