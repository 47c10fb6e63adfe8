use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use deploy_verifier::http::ReqwestClient;
use deploy_verifier::probe::default_plan;
use deploy_verifier::runner::run_plan;
use deploy_verifier::utils::config::Config;
use serde_json::{json, Value};
use std::time::Duration;

const TOKEN: &str = "integration-token-0123456789";

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Todo API", "version": "1.0.0" }))
}

async fn docs() -> &'static str {
    "<html>Swagger UI</html>"
}

async fn register_existing() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "detail": "Email already registered" })),
    )
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "test_user@example.com" && body["password"] == "testpass123" {
        (
            StatusCode::OK,
            Json(json!({
                "user": { "id": 1, "email": "test_user@example.com" },
                "access_token": TOKEN,
                "token_type": "bearer"
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid credentials" })),
        )
    }
}

async fn tasks(headers: HeaderMap) -> StatusCode {
    let expected = format!("Bearer {}", TOKEN);
    match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => StatusCode::NOT_FOUND,
        _ => StatusCode::UNAUTHORIZED,
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/docs", get(docs))
        .route("/api/auth/register", post(register_existing))
        .route("/api/auth/login", post(login))
        .route("/api/tasks", get(tasks));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_existing_user_run_passes_over_http() {
    let base_url = spawn_backend().await;
    let config = Config::with_base_url(&base_url);
    let client = ReqwestClient::new(Duration::from_secs(5)).unwrap();

    let run = run_plan(&client, &config, &default_plan()).await;

    let summary = run.summary();
    assert_eq!(summary.total, 6);
    assert_eq!(summary.passed, 6, "probes: {:?}", run.probes);
    assert_eq!(run.exit_code(), 0);
}

#[tokio::test]
async fn test_unreachable_backend_fails_all_probes() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = Config::with_base_url(&format!("http://127.0.0.1:{}", port));
    let client = ReqwestClient::new(Duration::from_secs(2)).unwrap();

    let run = run_plan(&client, &config, &default_plan()).await;

    let summary = run.summary();
    assert_eq!(summary.total, 6);
    assert_eq!(summary.passed, 0);
    assert_eq!(run.exit_code(), 1);
}
