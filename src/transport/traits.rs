//! Trait abstraction for the message transport to enable mocking in tests

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Template variables sent along with every message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub to_name: String,
    pub message: String,
}

/// Why a message could not be delivered
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("no response after {0:?}")]
    Timeout(Duration),

    #[error("send task ended before settling")]
    Aborted,
}

/// Trait for message delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Deliver one message. Credentials and endpoint belong to the implementation.
    async fn send(&self, params: &TemplateParams) -> Result<(), TransportError>;
}
