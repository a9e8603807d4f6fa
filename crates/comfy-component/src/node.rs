//! Tree bookkeeping embedded in every component.
//!
//! A [`Node`] owns the ordered child list and, with ancestor tracking on,
//! the ids of every component this one has been attached to.
//!
//! # Attach Protocol
//!
//! ```text
//! parent.attach([a, b])
//!   │
//!   ├─ validate: a != parent, parent not reachable from a   (same for b)
//!   │     └─ any failure ─► CycleDetected, nothing attached
//!   │
//!   └─ for child in [a, b]:
//!         parent.children.push(child)
//!         child.parents.push(parent.id)   (if child tracks ancestors)
//! ```
//!
//! Because cyclic attaches are rejected, every tree is acyclic and a
//! broadcast always terminates. Attaching the same child twice is allowed
//! and simply delivers each broadcast to it twice.
//!
//! # Re-entrancy
//!
//! A broadcast iterates over a snapshot of the child list taken when it
//! reaches the node. A callback may attach to any node (including the
//! one currently broadcasting); the new child only sees later broadcasts.

use crate::{Broadcastable, ComponentConfig, ComponentError, ComponentRef};
use comfy_event::Payload;
use comfy_types::ComponentId;
use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Child list and ancestor record of one component.
pub struct Node {
    children: Mutex<Vec<ComponentRef>>,
    parents: Mutex<Vec<ComponentId>>,
    track_ancestors: bool,
}

impl Node {
    /// Creates a node with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ComponentConfig::default())
    }

    /// Creates a node using `config`.
    #[must_use]
    pub fn with_config(config: &ComponentConfig) -> Self {
        Self {
            children: Mutex::new(Vec::new()),
            parents: Mutex::new(Vec::new()),
            track_ancestors: config.track_ancestors,
        }
    }

    /// Returns a snapshot of the child list.
    #[must_use]
    pub fn children(&self) -> Vec<ComponentRef> {
        self.children.lock().clone()
    }

    /// Returns the number of attached children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.lock().len()
    }

    /// Returns the ids this node was attached to, in attach order.
    ///
    /// Always empty when ancestor tracking is off.
    #[must_use]
    pub fn parents(&self) -> Vec<ComponentId> {
        self.parents.lock().clone()
    }

    /// Returns the names of the recorded parents.
    #[must_use]
    pub fn ancestor_names(&self) -> Vec<String> {
        self.parents
            .lock()
            .iter()
            .map(|parent| parent.name.clone())
            .collect()
    }

    /// Returns `true` if parents are recorded on attach.
    #[must_use]
    pub fn tracks_ancestors(&self) -> bool {
        self.track_ancestors
    }

    /// Delivers `payload` to every child, in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a child's subtree.
    pub fn forward(&self, payload: &Payload) -> Result<(), ComponentError> {
        for child in self.children() {
            child.dispatch(payload)?;
        }
        Ok(())
    }

    /// Attaches `children` under the component identified by `parent`.
    ///
    /// This is what [`Broadcastable::attach`] calls; `parent` must be the id
    /// of the component owning this node.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::CycleDetected`] without attaching anything
    /// if any child is `parent` itself or already reaches it.
    pub fn attach(
        &self,
        parent: &ComponentId,
        children: &[ComponentRef],
    ) -> Result<Vec<ComponentRef>, ComponentError> {
        for child in children {
            if child.id().is_same_instance(parent) || reaches(child.as_ref(), parent) {
                warn!(
                    "rejected attach of {} to {}: cycle",
                    child.id().name,
                    parent.name
                );
                return Err(ComponentError::CycleDetected {
                    parent: parent.clone(),
                    child: child.id().clone(),
                });
            }
        }

        for child in children {
            self.link(parent, ComponentRef::clone(child));
        }
        Ok(children.to_vec())
    }

    /// Appends one child without cycle validation.
    ///
    /// Only for children created by the caller that nothing else can reach yet.
    pub(crate) fn link(&self, parent: &ComponentId, child: ComponentRef) {
        debug!("attach {} -> {}", parent.name, child.id().name);
        let child_node = child.node();
        if child_node.track_ancestors {
            child_node.parents.lock().push(parent.clone());
        }
        self.children.lock().push(child);
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let children: Vec<String> = self
            .children
            .lock()
            .iter()
            .map(|child| child.id().name.clone())
            .collect();
        f.debug_struct("Node")
            .field("children", &children)
            .field("parents", &self.ancestor_names())
            .field("track_ancestors", &self.track_ancestors)
            .finish()
    }
}

/// Returns `true` if `target` is `from` or one of its descendants.
fn reaches(from: &dyn Broadcastable, target: &ComponentId) -> bool {
    let mut visited: HashSet<ComponentId> = HashSet::new();
    let mut stack = from.node().children();

    while let Some(current) = stack.pop() {
        if current.id().is_same_instance(target) {
            return true;
        }
        if visited.insert(current.id().clone()) {
            stack.extend(current.node().children());
        }
    }
    false
}
