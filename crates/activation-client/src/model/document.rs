use bytes::Bytes;
use serde::{Deserialize, Serialize};
use store_framework::{RecordId, Resource};

/// A file attached to a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub unit_id: RecordId,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Registers a document that already lives at `url`. Files go through
/// [`DocumentUpload`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCreate {
    pub unit_id: RecordId,
    pub name: String,
    pub url: String,
}

/// A file to upload for a unit.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub unit_id: RecordId,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

// Documents are replaced, never edited: no store method sends an update, and the
// create payload only fills the `Update` slot of the trait.
impl Resource for Document {
    const NAME: &'static str = "documents";
    type Create = DocumentCreate;
    type Update = DocumentCreate;
}
