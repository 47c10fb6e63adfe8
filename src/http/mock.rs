//! Scripted HTTP client for unit tests.
//!
//! Routes are registered per method and path; anything unrouted behaves like
//! an unreachable host. Every request is recorded so tests can assert on what
//! was (or was not) sent.

use super::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::error::TransportError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub const MOCK_BASE_URL: &str = "http://backend.mock";

#[derive(Debug, Clone)]
pub enum MockReply {
    Respond { status: u16, body: String },
    Timeout,
    Refused,
}

pub struct MockHttpClient {
    routes: HashMap<(Method, String), MockReply>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    /// Nothing routed: every request fails to connect
    pub fn unreachable() -> Self {
        Self {
            routes: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Healthy backend where register and login both issue `token`
    pub fn healthy(token: &str) -> Self {
        let auth = auth_body(token);
        Self::unreachable()
            .respond(Method::Get, "/health", 200, r#"{"status":"healthy"}"#)
            .respond(Method::Get, "/", 200, r#"{"message":"Todo API"}"#)
            .respond(Method::Get, "/docs", 200, "<html>docs</html>")
            .respond(Method::Post, "/api/auth/register", 200, &auth)
            .respond(Method::Post, "/api/auth/login", 200, &auth)
            .respond(Method::Get, "/api/tasks", 200, "[]")
    }

    pub fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.route(
            method,
            path,
            MockReply::Respond {
                status,
                body: body.to_string(),
            },
        )
    }

    pub fn route(mut self, method: Method, path: &str, reply: MockReply) -> Self {
        self.routes
            .insert((method, format!("{}{}", MOCK_BASE_URL, path)), reply);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_to(&self, path: &str) -> Option<HttpRequest> {
        let url = format!("{}{}", MOCK_BASE_URL, path);
        self.requests().into_iter().find(|r| r.url == url)
    }
}

/// Auth endpoint body the way the backend shapes it
pub fn auth_body(token: &str) -> String {
    serde_json::json!({
        "user": { "id": 42, "email": "test_user@example.com" },
        "access_token": token,
        "token_type": "bearer"
    })
    .to_string()
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        match self.routes.get(&(request.method, request.url.clone())) {
            Some(MockReply::Respond { status, body }) => Ok(HttpResponse::new(*status, body.clone())),
            Some(MockReply::Timeout) => Err(TransportError::Timeout(10)),
            Some(MockReply::Refused) | None => Err(TransportError::Connect(format!(
                "error trying to connect: {}",
                request.url
            ))),
        }
    }
}
