//! Component identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a component in a comfy tree.
///
/// `name` is the human-readable type label that appears in log records
/// (a `Player`, a `Movement`, a `Receiver`). `uuid` is the instance identity:
/// every call to [`ComponentId::new`] yields a fresh random UUID, so two
/// components sharing a name are still distinct nodes.
///
/// # Equality Semantics
///
/// `PartialEq` compares all fields. Use [`same_name`](Self::same_name) to
/// compare labels only.
///
/// # Example
///
/// ```
/// use comfy_types::ComponentId;
///
/// let a = ComponentId::new("Player");
/// let b = ComponentId::new("Player");
///
/// assert_ne!(a, b);
/// assert!(a.same_name(&b));
/// assert_eq!(a.name, "Player");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId {
    /// Instance identity.
    pub uuid: Uuid,
    /// Type label used in diagnostics.
    pub name: String,
}

impl ComponentId {
    /// Creates a new identifier with a random UUID v4.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Compares labels only, ignoring instance identity.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns `true` if both ids denote the same instance.
    #[must_use]
    pub fn is_same_instance(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.uuid)
    }
}
