use crate::error::TransportError;
use serde::{Deserialize, Deserializer, Serialize};

/// Endpoints exercised by the probes
pub const HEALTH_PATH: &str = "/health";
pub const ROOT_PATH: &str = "/";
pub const DOCS_PATH: &str = "/docs";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const TASKS_PATH: &str = "/api/tasks";

/// What a probe checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProbeKind {
    /// GET /health, expects 200 with a JSON body
    HealthCheck,
    /// GET /, expects 200 with a JSON body
    RootEndpoint,
    /// GET /docs, expects 200
    ApiDocs,
    /// POST /api/auth/register, 200 or 400 (already registered)
    Registration,
    /// POST /api/auth/login, expects 200
    Login,
    /// GET /api/tasks with the bearer token, 200 or 404
    AuthenticatedRequest,
}

impl ProbeKind {
    /// Header printed before the probe runs
    pub fn heading(&self) -> &'static str {
        match self {
            ProbeKind::HealthCheck => "Testing Health Check",
            ProbeKind::RootEndpoint => "Testing Root Endpoint",
            ProbeKind::ApiDocs => "Testing API Documentation",
            ProbeKind::Registration => "Testing User Registration",
            ProbeKind::Login => "Testing User Login",
            ProbeKind::AuthenticatedRequest => "Testing Authenticated Request",
        }
    }
}

/// One entry of a verification plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSpec {
    pub name: String,
    pub kind: ProbeKind,
}

impl ProbeSpec {
    pub fn new(name: &str, kind: ProbeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// The fixed deployment check, in execution order
pub fn default_plan() -> Vec<ProbeSpec> {
    vec![
        ProbeSpec::new("Health Check", ProbeKind::HealthCheck),
        ProbeSpec::new("Root Endpoint", ProbeKind::RootEndpoint),
        ProbeSpec::new("API Documentation", ProbeKind::ApiDocs),
        ProbeSpec::new("User Registration", ProbeKind::Registration),
        ProbeSpec::new("User Login", ProbeKind::Login),
        ProbeSpec::new("Authenticated Request", ProbeKind::AuthenticatedRequest),
    ]
}

/// Body of register and login requests
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body returned by register and login.
///
/// `user` keeps missing (`None`) apart from explicit `null` (`Some(None)`):
/// a missing user is reported as unknown, a null one rejects the response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "present")]
    pub user: Option<Option<AuthUser>>,
    #[serde(default)]
    pub access_token: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    /// A 200 from an auth endpoint must carry a token and must not null out the user
    pub fn check(&self) -> Result<(), TransportError> {
        if matches!(self.user, Some(None)) {
            return Err(TransportError::Decode("user is null".to_string()));
        }
        if self.access_token.is_none() {
            return Err(TransportError::Decode("missing access_token".to_string()));
        }
        Ok(())
    }

    fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref().and_then(|u| u.as_ref())
    }

    /// Issued token, ignoring empty strings
    pub fn token(&self) -> Option<String> {
        self.access_token.clone().filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> String {
        match self.user().and_then(|u| u.id.as_ref()) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "None".to_string(),
        }
    }

    pub fn user_email(&self) -> String {
        self.user()
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| "None".to_string())
    }
}

/// First 20 characters of a token, for display
pub fn token_preview(token: &str) -> String {
    token.chars().take(20).collect()
}
