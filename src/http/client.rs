use super::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::error::TransportError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// reqwest-backed client with a fixed per-request timeout
pub struct ReqwestClient {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ReqwestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            timeout_secs: timeout.as_secs(),
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        log::debug!("{} {}", request.method, request.url);

        let mut req = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        if let Some(token) = &request.bearer {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &request.json {
            req = req.json(body);
        }

        let map_err = |e: reqwest::Error| TransportError::from_reqwest(e, self.timeout_secs);

        let res = req.send().await.map_err(map_err)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(map_err)?;

        log::debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );

        Ok(HttpResponse { status, body })
    }
}
