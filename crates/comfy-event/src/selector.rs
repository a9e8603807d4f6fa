//! Event selectors used by receivers.
//!
//! A receiver is bound either to one event name or to every event.
//! The wildcard is spelled `"*"`:
//!
//! | Selector | Matches |
//! |----------|---------|
//! | `"move"` | only the `move` key of a broadcast |
//! | `"*"` | every key of a broadcast, once per key |
//!
//! # Example
//!
//! ```
//! use comfy_event::EventSelector;
//!
//! assert!(EventSelector::parse("*").is_wildcard());
//! assert_eq!(EventSelector::parse("move"), EventSelector::named("move"));
//! ```

use serde::{Deserialize, Serialize};

/// Wildcard sentinel.
pub const WILDCARD: &str = "*";

/// Which event names a receiver reacts to.
///
/// Serializes as a plain string, `"*"` for [`Any`](Self::Any).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventSelector {
    /// Every key present in a broadcast.
    Any,
    /// One specific event name.
    Named(String),
}

impl EventSelector {
    /// Parses a selector; `"*"` is the wildcard, anything else a name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD {
            Self::Any
        } else {
            Self::Named(raw.to_string())
        }
    }

    /// Creates a selector for one event name.
    ///
    /// The name is taken literally: `named("*")` matches only a key
    /// spelled `*`. Use [`parse`](Self::parse) to honor the wildcard.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns `true` for the wildcard selector.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns `true` if an event called `name` is selected.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Named(own) => own == name,
        }
    }

    /// Returns the selector in its textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => WILDCARD,
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for EventSelector {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for EventSelector {
    fn from(raw: String) -> Self {
        if raw == WILDCARD {
            Self::Any
        } else {
            Self::Named(raw)
        }
    }
}

impl From<EventSelector> for String {
    fn from(selector: EventSelector) -> Self {
        match selector {
            EventSelector::Any => WILDCARD.to_string(),
            EventSelector::Named(name) => name,
        }
    }
}

impl std::fmt::Display for EventSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
