//! Raw named arguments of a broadcast.
//!
//! [`EventArgs`] is what a caller hands to a component's `event` entry
//! point: an ordered list of `name = value` bindings where each value may be
//! a single JSON value or a JSON array. Nothing is normalized here; that
//! happens exactly once in [`EventArgs::normalize`].
//!
//! # Example
//!
//! ```
//! use comfy_event::EventArgs;
//! use serde_json::json;
//!
//! let args = EventArgs::new()
//!     .arg("move", json!([-1, -1]))
//!     .arg("jump", 5);
//!
//! let payload = args.normalize();
//! assert_eq!(payload.get("move"), Some(&[json!(-1), json!(-1)][..]));
//! assert_eq!(payload.get("jump"), Some(&[json!(5)][..]));
//! ```

use crate::{EventError, Payload, PayloadEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered raw arguments of one broadcast.
///
/// Names are unique. Binding a name twice replaces the earlier value
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventArgs {
    entries: Vec<(String, Value)>,
}

impl EventArgs {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to `value`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builds arguments from the fields of a JSON object.
    ///
    /// Field order follows the object's iteration order, which for
    /// `serde_json::Map` without `preserve_order` is sorted by key.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotAnObject`] for any non-object value.
    pub fn from_object(value: Value) -> Result<Self, EventError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(EventError::NotAnObject(json_type_name(&other).to_string())),
        }
    }

    /// Returns the number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns the bound names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Normalizes every value to a sequence.
    ///
    /// A JSON array is already a sequence and is kept unchanged; any other
    /// value becomes a one-element sequence. `[[1, 2]]` therefore stays a
    /// one-element sequence holding the array `[1, 2]`.
    #[must_use]
    pub fn normalize(self) -> Payload {
        let entries = self
            .entries
            .into_iter()
            .map(|(name, value)| PayloadEntry {
                name,
                values: into_sequence(value),
            })
            .collect();
        Payload::from_entries(entries)
    }
}

impl<N, V> FromIterator<(N, V)> for EventArgs
where
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

impl From<EventArgs> for Payload {
    fn from(args: EventArgs) -> Self {
        args.normalize()
    }
}

fn into_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        scalar => vec![scalar],
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
