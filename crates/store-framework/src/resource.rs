//! # Resource Trait
//!
//! The `Resource` trait is the contract every domain record (staff, units, sizes, ...)
//! implements so the generic [`ResourceClient`](crate::ResourceClient) can talk to its
//! endpoint. It names the resource's base path and the payload types used to create
//! and update it. Implementing it is all it takes to get the full CRUD surface.
//!
//! # Architecture Note
//! We use associated types (`Create`, `Update`) so a unit payload can never be sent to
//! the staff endpoint. The compiler rejects the mix-up before it reaches the wire.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

/// Trait that any remote record type must implement to be served by a `ResourceClient`.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Path segment after `/api/` (e.g. `"units"` for `/api/units`).
    const NAME: &'static str;

    /// The data sent to create a new record.
    type Create: Serialize + Send + Sync + Debug;

    /// The data sent to update an existing record.
    type Update: Serialize + Send + Sync + Debug;
}

/// Identifier of a remote record.
///
/// The API is not consistent about identifier types: some collections use numeric keys,
/// others strings. `RecordId` accepts either on the wire, keeps the original form when
/// serialized back, and compares by textual form so `7` and `"7"` are the same record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Number(a), RecordId::Number(b)) => a == b,
            (RecordId::Text(a), RecordId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_compare_by_text() {
        assert_eq!(RecordId::from(7), RecordId::from("7"));
        assert_ne!(RecordId::from(7), RecordId::from("8"));
    }

    #[test]
    fn test_deserializes_both_forms() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[42, "abc"]"#).unwrap();
        assert_eq!(ids[0], RecordId::Number(42));
        assert_eq!(ids[1].to_string(), "abc");
    }
}
