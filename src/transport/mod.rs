//! Message transport module for delivering contact messages

mod client;
mod traits;

pub use client::EmailJsClient;
pub use traits::{MessageTransport, TemplateParams, TransportError};

#[cfg(test)]
pub use traits::MockMessageTransport;
