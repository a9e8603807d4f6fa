//! Component layer errors.
//!
//! All errors implement [`ErrorCode`] for unified handling.
//!
//! # Error Code Convention
//!
//! | Error | Code | Recoverable |
//! |-------|------|-------------|
//! | [`Callback`](ComponentError::Callback) | `COMPONENT_CALLBACK_FAILED` | Yes |
//! | [`CycleDetected`](ComponentError::CycleDetected) | `COMPONENT_CYCLE_DETECTED` | No |
//!
//! # Propagation
//!
//! The broadcast core never catches. The first failing callback aborts the
//! rest of the broadcast and its error travels, untouched, back to whoever
//! called `event` on the root:
//!
//! ```text
//! root.event(..)
//!   └─ child.dispatch(..)
//!        └─ receiver.dispatch(..)
//!             └─ callback(..) ── Err(e) ──► ComponentError::Callback { source: e }
//!                                            (siblings after this point are skipped)
//! ```

use comfy_types::{ComponentId, ErrorCode};
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// Error type a callback may return.
///
/// Any `std::error::Error` (or a plain string via `.into()`) converts into it.
pub type CallbackError = Box<dyn StdError + Send + Sync>;

/// Component layer error.
///
/// # Example
///
/// ```
/// use comfy_component::ComponentError;
/// use comfy_types::{ComponentId, ErrorCode};
///
/// let err = ComponentError::CycleDetected {
///     parent: ComponentId::new("Player"),
///     child: ComponentId::new("Player"),
/// };
/// assert_eq!(err.code(), "COMPONENT_CYCLE_DETECTED");
/// assert!(!err.is_recoverable());
/// ```
#[derive(Debug, Clone, Error)]
pub enum ComponentError {
    /// A receiver callback returned an error.
    ///
    /// `source` is the callback's own error, not reinterpreted. Use
    /// [`callback_error`](ComponentError::callback_error) to downcast it.
    #[error("callback for event `{event}` failed: {source}")]
    Callback {
        /// Event name the callback was invoked for.
        event: String,
        /// Error returned by the callback.
        source: Arc<dyn StdError + Send + Sync>,
    },

    /// An attach would make the tree cyclic.
    ///
    /// Raised when a component is attached to itself or to one of its own
    /// descendants. Nothing is attached when this is returned.
    #[error("attaching {child} to {parent} would create a cycle")]
    CycleDetected {
        /// Component the attach was called on.
        parent: ComponentId,
        /// Component that was being attached.
        child: ComponentId,
    },
}

impl ComponentError {
    /// Wraps a callback failure for `event`.
    ///
    /// A callback that itself ran a nested broadcast and failed with a
    /// [`ComponentError`] has that error passed through as-is instead of
    /// being wrapped a second time.
    #[must_use]
    pub fn callback(event: impl Into<String>, err: CallbackError) -> Self {
        match err.downcast::<ComponentError>() {
            Ok(inner) => *inner,
            Err(other) => Self::Callback {
                event: event.into(),
                source: Arc::from(other),
            },
        }
    }

    /// Returns the callback's error for downcasting, if this is a callback failure.
    #[must_use]
    pub fn callback_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::Callback { source, .. } => Some(source.as_ref()),
            Self::CycleDetected { .. } => None,
        }
    }
}

impl ErrorCode for ComponentError {
    fn code(&self) -> &'static str {
        match self {
            Self::Callback { .. } => "COMPONENT_CALLBACK_FAILED",
            Self::CycleDetected { .. } => "COMPONENT_CYCLE_DETECTED",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Callback { .. } => true,
            Self::CycleDetected { .. } => false,
        }
    }
}
