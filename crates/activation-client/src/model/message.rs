use serde::{Deserialize, Serialize};
use store_framework::RecordId;

/// A chat message as written to the realtime `messages` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sender_id: RecordId,
    pub sender_name: String,
    pub text: String,
    /// Milliseconds since the Unix epoch, set by the sender.
    pub sent_at: u64,
}
