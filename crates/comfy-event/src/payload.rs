//! Normalized broadcast payload.
//!
//! A [`Payload`] is produced once per broadcast by
//! [`EventArgs::normalize`](crate::EventArgs::normalize) and then shared by
//! reference with every component in the subtree. It is immutable: children
//! see exactly the mapping the root built, and nothing re-normalizes it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One event name with its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadEntry {
    /// Event name.
    pub name: String,
    /// Positional values, in order.
    pub values: Vec<Value>,
}

/// Ordered mapping from event name to a sequence of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payload {
    entries: Vec<PayloadEntry>,
}

impl Payload {
    pub(crate) fn from_entries(entries: Vec<PayloadEntry>) -> Self {
        Self { entries }
    }

    /// Returns the values bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.values.as_slice())
    }

    /// Returns `true` if `name` is part of this broadcast.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Iterates entries in broadcast order.
    pub fn iter(&self) -> impl Iterator<Item = &PayloadEntry> {
        self.entries.iter()
    }

    /// Iterates event names in broadcast order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Returns the number of event names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the broadcast carries no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Payload {
    type Item = &'a PayloadEntry;
    type IntoIter = std::slice::Iter<'a, PayloadEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders positional values as a comma-separated string.
///
/// Strings are written without quotes; every other value uses its JSON text.
///
/// # Example
///
/// ```
/// use comfy_event::render_values;
/// use serde_json::json;
///
/// assert_eq!(render_values(&[json!(-1), json!(-1)]), "-1, -1");
/// assert_eq!(render_values(&[json!("up"), json!(true)]), "up, true");
/// ```
#[must_use]
pub fn render_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
