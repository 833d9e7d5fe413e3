//! HTTP plumbing shared by the provider adapters.

use reqwest::Client;
use std::time::Duration;

use crate::ports::AIError;

/// Builds a client; without a timeout, requests wait for the service.
pub(super) fn build_client(timeout: Option<Duration>) -> Result<Client, AIError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| AIError::InvalidRequest(format!("failed to create HTTP client: {}", e)))
}

pub(super) fn map_send_error(e: reqwest::Error, timeout: Option<Duration>) -> AIError {
    if e.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.map(|t| t.as_secs() as u32).unwrap_or_default(),
        }
    } else if e.is_connect() {
        AIError::network(format!("Connection failed: {}", e))
    } else {
        AIError::network(e.to_string())
    }
}
