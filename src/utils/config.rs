use std::time::Duration;

/// Backend under test
pub const BASE_URL: &str = "https://mnusrulah104-todo-app.hf.space";

/// Account used by the registration and login probes
pub const TEST_EMAIL: &str = "test_user@example.com";
pub const TEST_PASSWORD: &str = "testpass123";

/// Per-request timeout (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Test account credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Verification configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root address of the deployed backend (no trailing slash)
    pub base_url: String,

    /// Credentials for register/login
    pub credentials: Credentials,

    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl Config {
    /// Same constants, different backend. Used by tests against a local server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            credentials: Credentials {
                email: TEST_EMAIL.to_string(),
                password: TEST_PASSWORD.to_string(),
            },
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}
