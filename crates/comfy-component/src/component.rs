//! Plain branch component.
//!
//! [`Component`] has no behavior of its own: it forwards every broadcast to
//! its children. Use it to group receivers, or embed a [`Node`] in your own
//! type when the group needs state (see the `movement` demo).
//!
//! # Example
//!
//! ```
//! use comfy_component::{BroadcastExt, Component, Receiver};
//! use comfy_event::EventArgs;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let hits = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&hits);
//!
//! let root = Component::spawn("Root");
//! let group = Component::spawn("Group");
//! group.connect(Receiver::spawn("tick", move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! }))?;
//! root.connect(group)?;
//!
//! root.invoke(EventArgs::new().arg("tick", 1))?;
//! assert_eq!(hits.load(Ordering::SeqCst), 1);
//! # Ok::<(), comfy_component::ComponentError>(())
//! ```

use crate::{Broadcastable, ComponentConfig, ComponentRef, Node};
use comfy_types::ComponentId;
use std::sync::Arc;

/// Tree node that forwards broadcasts to its children.
#[derive(Debug)]
pub struct Component {
    id: ComponentId,
    node: Node,
}

impl Component {
    /// Creates a component labelled `name` with the default configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, &ComponentConfig::default())
    }

    /// Creates a component labelled `name` using `config`.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: &ComponentConfig) -> Self {
        Self {
            id: ComponentId::new(name),
            node: Node::with_config(config),
        }
    }

    /// Creates a component and returns it as a shared reference.
    #[must_use]
    pub fn spawn(name: impl Into<String>) -> ComponentRef {
        Arc::new(Self::new(name))
    }
}

impl Broadcastable for Component {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }
}
