//! # Session & Identity
//!
//! The authentication layer stores the signed-in user as serialized JSON. This crate
//! only ever reads it, and it does so through an explicit [`Session`] value rather than
//! ambient global state. The only thing looked at is the record's `id`.

use crate::model::Staff;
use serde::Deserialize;
use store_framework::RecordId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("no current user in session")]
    Missing,

    #[error("current user record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct CurrentUser {
    id: RecordId,
}

/// The serialized current-user record, as handed over by the auth layer.
#[derive(Clone, Debug, Default)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    pub fn new(current_user: Option<String>) -> Self {
        Self { current_user }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Id of the signed-in user.
    pub fn current_user_id(&self) -> Result<RecordId, IdentityError> {
        let raw = self.current_user.as_deref().ok_or(IdentityError::Missing)?;
        let user: CurrentUser = serde_json::from_str(raw)?;
        Ok(user.id)
    }
}

/// Anything with a record id that can be compared to the signed-in user.
pub trait Identified {
    fn record_id(&self) -> &RecordId;
}

impl Identified for Staff {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Identified for RecordId {
    fn record_id(&self) -> &RecordId {
        self
    }
}

/// True when `user` is the signed-in user. `7` and `"7"` count as the same id.
pub fn is_my_profile(session: &Session, user: &impl Identified) -> Result<bool, IdentityError> {
    Ok(session.current_user_id()? == *user.record_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: i64) -> Staff {
        Staff {
            id: id.into(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: None,
            phone: None,
        }
    }

    #[test]
    fn test_same_id_is_my_profile() {
        let session = Session::new(Some(r#"{"id":7,"name":"Ana"}"#.to_string()));
        assert!(is_my_profile(&session, &staff(7)).unwrap());
        assert!(is_my_profile(&session, &RecordId::from("7")).unwrap());
    }

    #[test]
    fn test_other_id_is_not_my_profile() {
        let session = Session::new(Some(r#"{"id":"7"}"#.to_string()));
        assert!(!is_my_profile(&session, &staff(8)).unwrap());
    }

    #[test]
    fn test_missing_session_is_an_error() {
        let result = is_my_profile(&Session::anonymous(), &staff(7));
        assert!(matches!(result, Err(IdentityError::Missing)));
    }

    #[test]
    fn test_malformed_session_is_an_error() {
        let session = Session::new(Some("not json".to_string()));
        assert!(matches!(
            is_my_profile(&session, &staff(7)),
            Err(IdentityError::Malformed(_))
        ));

        let no_id = Session::new(Some(r#"{"name":"Ana"}"#.to_string()));
        assert!(matches!(
            no_id.current_user_id(),
            Err(IdentityError::Malformed(_))
        ));
    }
}
