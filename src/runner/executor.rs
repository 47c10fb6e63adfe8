use super::console::{print_detail, print_status};
use super::context::RunContext;
use crate::error::TransportError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::probe::{
    token_preview, AuthPayload, AuthResponse, ProbeKind, ProbeSpec, DOCS_PATH, HEALTH_PATH,
    LOGIN_PATH, REGISTER_PATH, ROOT_PATH, TASKS_PATH,
};

/// How a probe ended
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed,
    Failed(String),
    Skipped(String),
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }
}

/// Runs probes one at a time against an [`HttpClient`]
pub struct ProbeExecutor<'a> {
    client: &'a dyn HttpClient,
    pub context: RunContext,
}

impl<'a> ProbeExecutor<'a> {
    pub fn new(client: &'a dyn HttpClient, context: RunContext) -> Self {
        Self { client, context }
    }

    /// Run one probe. Transport faults become a failed verdict here and never
    /// reach the caller.
    pub async fn execute(&mut self, spec: &ProbeSpec) -> Verdict {
        let result = match spec.kind {
            ProbeKind::HealthCheck => self.get_json(&spec.name, HEALTH_PATH).await,
            ProbeKind::RootEndpoint => self.get_json(&spec.name, ROOT_PATH).await,
            ProbeKind::ApiDocs => self.api_docs(&spec.name).await,
            ProbeKind::Registration => self.registration(&spec.name).await,
            ProbeKind::Login => self.login(&spec.name).await,
            ProbeKind::AuthenticatedRequest => self.authenticated_request(&spec.name).await,
        };

        match result {
            Ok(verdict) => verdict,
            Err(e) => {
                log::warn!("{} transport fault: {:?}", spec.name, e);
                print_status(&format!("{} error: {}", spec.name, e), false);
                Verdict::Failed(e.to_string())
            }
        }
    }

    /// GET an endpoint that must answer 200 with a JSON body
    async fn get_json(&self, name: &str, path: &str) -> Result<Verdict, TransportError> {
        let response = self.client.send(HttpRequest::get(self.context.url(path))).await?;

        if response.status != 200 {
            return Ok(unexpected_status(name, &response));
        }

        let data: serde_json::Value = response.json()?;
        print_status(&format!("{} passed: {}", name, data), true);
        Ok(Verdict::Passed)
    }

    async fn api_docs(&self, name: &str) -> Result<Verdict, TransportError> {
        let url = self.context.url(DOCS_PATH);
        let response = self.client.send(HttpRequest::get(&url)).await?;

        if response.status != 200 {
            return Ok(unexpected_status(name, &response));
        }

        print_status("API documentation is accessible", true);
        println!("   Visit: {}", url);
        Ok(Verdict::Passed)
    }

    async fn registration(&mut self, name: &str) -> Result<Verdict, TransportError> {
        let response = self.post_credentials(REGISTER_PATH).await?;

        match response.status {
            200 => {
                let auth: AuthResponse = response.json()?;
                auth.check()?;
                print_status("Registration successful", true);
                report_auth(&auth);
                self.context.registration_token = auth.token();
                Ok(Verdict::Passed)
            }
            400 => {
                // Any 400 is taken to mean the account already exists
                log::debug!("registration returned 400: {}", response.body);
                print_status(
                    "User already exists (expected if running multiple times)",
                    true,
                );
                Ok(Verdict::Passed)
            }
            _ => Ok(unexpected_status(name, &response)),
        }
    }

    async fn login(&mut self, name: &str) -> Result<Verdict, TransportError> {
        let response = self.post_credentials(LOGIN_PATH).await?;

        if response.status != 200 {
            return Ok(unexpected_status(name, &response));
        }

        let auth: AuthResponse = response.json()?;
        auth.check()?;
        print_status("Login successful", true);
        report_auth(&auth);
        self.context.login_token = auth.token();
        Ok(Verdict::Passed)
    }

    async fn authenticated_request(&self, name: &str) -> Result<Verdict, TransportError> {
        let Some(token) = self.context.auth_token() else {
            let reason = "Skipping authenticated request (no token)";
            print_status(reason, false);
            return Ok(Verdict::Skipped(reason.to_string()));
        };

        let request = HttpRequest::get(self.context.url(TASKS_PATH)).bearer(token);
        let response = self.client.send(request).await?;

        match response.status {
            200 | 404 => {
                print_status("Authenticated request successful", true);
                Ok(Verdict::Passed)
            }
            _ => Ok(unexpected_status(name, &response)),
        }
    }

    async fn post_credentials(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let credentials = &self.context.config.credentials;
        let payload = serde_json::to_value(AuthPayload {
            email: &credentials.email,
            password: &credentials.password,
        })?;

        self.client
            .send(HttpRequest::post_json(self.context.url(path), payload))
            .await
    }
}

fn unexpected_status(name: &str, response: &HttpResponse) -> Verdict {
    let message = format!("{} failed with status {}", name, response.status);
    print_status(&message, false);
    if !response.body.is_empty() {
        print_detail("Response", &response.body);
    }
    Verdict::Failed(message)
}

fn report_auth(auth: &AuthResponse) {
    print_detail("User ID", &auth.user_id());
    print_detail("Email", &auth.user_email());
    match auth.access_token.as_deref() {
        Some(token) => print_detail("Token received", &format!("{}...", token_preview(token))),
        None => print_detail("Token received", "None"),
    }
}
