use crate::utils::config::Config;

/// Runtime state threaded between probes
pub struct RunContext {
    pub config: Config,

    /// Token issued by the registration probe
    pub registration_token: Option<String>,

    /// Token issued by the login probe
    pub login_token: Option<String>,
}

impl RunContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registration_token: None,
            login_token: None,
        }
    }

    /// Token for authenticated requests: login first, registration as fallback
    pub fn auth_token(&self) -> Option<&str> {
        self.login_token
            .as_deref()
            .or(self.registration_token.as_deref())
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}
