//! HTTP client for the EmailJS send API
//!
//! Each message is a single JSON POST carrying the service and template
//! identifiers, the public key and the template variables.

use super::traits::{MessageTransport, TemplateParams, TransportError};
use crate::config::ContactConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Longest error body kept for diagnostics
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Request body expected by EmailJS
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Client for delivering messages through EmailJS
pub struct EmailJsClient {
    http: reqwest::Client,
    api_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &ContactConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        })
    }
}

#[async_trait]
impl MessageTransport for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), TransportError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self.http.post(&self.api_url).json(&body).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "EmailJS accepted message");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        })
    }
}
