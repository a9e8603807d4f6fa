//! Shared error-code contract.
//!
//! Every error type in the comfy crates implements [`ErrorCode`] so callers
//! can branch on a stable string instead of matching concrete enums across
//! crate boundaries.
//!
//! # Example
//!
//! ```
//! use comfy_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum SinkError {
//!     Closed,
//!     Full,
//! }
//!
//! impl ErrorCode for SinkError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Closed => "SINK_CLOSED",
//!             Self::Full => "SINK_FULL",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Full)
//!     }
//! }
//!
//! assert_eq!(SinkError::Full.code(), "SINK_FULL");
//! assert!(SinkError::Full.is_recoverable());
//! ```

/// Machine-readable classification of an error.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, e.g. `"COMPONENT_CYCLE_DETECTED"`
/// - **Prefixed by crate domain**: `EVENT_` for `comfy-event`,
///   `COMPONENT_` for `comfy-component`
/// - **Stable**: a code is part of the public API once released
pub trait ErrorCode {
    /// Returns the machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether repeating the operation may succeed.
    ///
    /// A callback failure may be transient; a structural error such as a
    /// rejected cyclic attach will fail the same way every time.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error code is non-empty, prefixed, and UPPER_SNAKE_CASE.
///
/// # Panics
///
/// Panics with a descriptive message if any check fails.
///
/// # Example
///
/// ```
/// use comfy_types::{assert_error_code, ErrorCode};
///
/// struct Boom;
///
/// impl ErrorCode for Boom {
///     fn code(&self) -> &'static str { "DEMO_BOOM" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Boom, "DEMO_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Runs [`assert_error_code`] over every given error.
///
/// Pass one value per enum variant to cover the whole error type.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
