//! # Chat Store
//!
//! One write path: append a message document to the realtime `messages` collection.
//! Reading and live updates are handled by the realtime backend's own SDK, not here.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use store_framework::{ApiError, RealtimeChannel};
use tracing::{debug, instrument};

/// Collection chat messages are appended to.
pub const MESSAGES_COLLECTION: &str = "messages";

#[derive(Clone)]
pub struct ChatStore {
    channel: Arc<dyn RealtimeChannel>,
}

impl ChatStore {
    pub fn new(channel: Arc<dyn RealtimeChannel>) -> Self {
        Self { channel }
    }

    /// Append `payload` as a new document. It must serialize to a JSON object.
    #[instrument(skip_all)]
    pub async fn send_message<P: Serialize + ?Sized>(&self, payload: &P) -> Result<(), ApiError> {
        let document = match serde_json::to_value(payload).map_err(ApiError::Encode)? {
            Value::Object(document) => document,
            other => {
                return Err(ApiError::InvalidPayload(format!(
                    "chat message must be a JSON object, got {other}"
                )))
            }
        };
        debug!(fields = document.len(), "Sending message");
        self.channel.append(MESSAGES_COLLECTION, document).await
    }
}
