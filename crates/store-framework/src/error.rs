//! # Framework Errors
//!
//! This module defines the error type shared by every store and transport.
//! Stores never wrap or translate it: whatever the transport reports is what
//! the caller receives.

/// Errors produced while talking to the remote API or the realtime backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request payload could not be encoded as JSON.
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The payload has a shape the backend cannot store.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Transport closed")]
    TransportClosed,

    #[error("Transport dropped response channel")]
    TransportDropped,
}

impl ApiError {
    /// HTTP status of the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
