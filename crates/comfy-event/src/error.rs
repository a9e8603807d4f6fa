//! Event layer errors.
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`EventError::NotAnObject`] | `EVENT_NOT_AN_OBJECT` | No |
//!
//! Payload values themselves are never validated; the only failure in this
//! layer is building named arguments from JSON that has no names.

use comfy_types::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Event layer error.
///
/// # Example
///
/// ```
/// use comfy_event::{EventArgs, EventError};
/// use comfy_types::ErrorCode;
/// use serde_json::json;
///
/// let err = EventArgs::from_object(json!([1, 2])).unwrap_err();
/// assert_eq!(err.code(), "EVENT_NOT_AN_OBJECT");
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum EventError {
    /// Named arguments were requested from a JSON value that is not an object.
    ///
    /// Holds the JSON type name that was received (e.g. `"array"`).
    #[error("event arguments must be a JSON object, got {0}")]
    NotAnObject(String),
}

impl ErrorCode for EventError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject(_) => "EVENT_NOT_AN_OBJECT",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::NotAnObject(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comfy_types::assert_error_codes;

    #[test]
    fn all_error_codes_valid() {
        assert_error_codes(&[EventError::NotAnObject("array".into())], "EVENT_");
    }

    #[test]
    fn not_an_object_error() {
        let err = EventError::NotAnObject("string".into());

        assert_eq!(err.code(), "EVENT_NOT_AN_OBJECT");
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("got string"));
    }
}
