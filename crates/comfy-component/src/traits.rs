//! The broadcast capability shared by every tree member.
//!
//! # Trait Hierarchy
//!
//! ```text
//! Broadcastable            (id, node, dispatch, event, attach)
//!   └── BroadcastExt       (connect, invoke) - blanket, sugar only
//!
//! Implementors:
//!   ├── Component          dispatch = forward to children
//!   ├── LoggingComponent   dispatch = forward (first child logs)
//!   ├── Receiver           dispatch = match + callback, never forwards
//!   └── LoggingReceiver    dispatch = match + log + callback
//! ```
//!
//! # Implementing Your Own Component
//!
//! Hold a [`Node`] and an id; everything else has a default.
//!
//! ```
//! use comfy_component::{Broadcastable, Node};
//! use comfy_types::ComponentId;
//!
//! struct Inventory {
//!     id: ComponentId,
//!     node: Node,
//! }
//!
//! impl Broadcastable for Inventory {
//!     fn id(&self) -> &ComponentId {
//!         &self.id
//!     }
//!
//!     fn node(&self) -> &Node {
//!         &self.node
//!     }
//! }
//! ```

use crate::{ComponentError, Node};
use comfy_event::{EventArgs, Payload};
use comfy_types::ComponentId;
use std::sync::Arc;
use tracing::trace;

/// Shared reference to a tree member.
///
/// A component may be held by several parents at once; the tree position
/// is owned by each parent's child list.
pub type ComponentRef = Arc<dyn Broadcastable>;

/// A tree member that can hold children and receive broadcasts.
///
/// # Broadcast Contract
///
/// - [`event`](Self::event) normalizes the raw arguments exactly once and
///   hands the resulting [`Payload`] to [`dispatch`](Self::dispatch).
/// - `dispatch` receives the already normalized payload. The default
///   forwards it unchanged to every child, in attachment order, depth-first:
///   a child's whole subtree finishes before the next sibling starts.
/// - The first error aborts the remainder of the broadcast and is returned
///   to the caller of `event`.
///
/// # Thread Safety
///
/// Members are `Send + Sync` so trees can be built and moved freely, but a
/// broadcast is an ordinary synchronous call on the caller's thread.
pub trait Broadcastable: Send + Sync {
    /// Returns the member's identifier.
    fn id(&self) -> &ComponentId;

    /// Returns the member's tree bookkeeping.
    fn node(&self) -> &Node;

    /// Handles an already normalized broadcast.
    ///
    /// # Errors
    ///
    /// Returns the first error raised anywhere below this member.
    fn dispatch(&self, payload: &Payload) -> Result<(), ComponentError> {
        self.node().forward(payload)
    }

    /// Broadcast entry point.
    ///
    /// # Errors
    ///
    /// Returns the first callback failure in the subtree.
    fn event(&self, args: EventArgs) -> Result<(), ComponentError> {
        let payload = args.normalize();
        trace!(
            "broadcast from {}: {} event(s)",
            self.id().name,
            payload.len()
        );
        self.dispatch(&payload)
    }

    /// Appends `children` to this member's child list, in order.
    ///
    /// Returns the attached references for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::CycleDetected`] if any child is this member
    /// or already reaches it. In that case nothing is attached.
    fn attach(&self, children: &[ComponentRef]) -> Result<Vec<ComponentRef>, ComponentError> {
        self.node().attach(self.id(), children)
    }
}

/// One component or an ordered list of components to attach.
pub enum Attachment {
    /// A single component.
    One(ComponentRef),
    /// Several components, attached in order.
    Many(Vec<ComponentRef>),
}

impl Attachment {
    /// Flattens into the list passed to [`Broadcastable::attach`].
    #[must_use]
    pub fn into_vec(self) -> Vec<ComponentRef> {
        match self {
            Self::One(component) => vec![component],
            Self::Many(components) => components,
        }
    }
}

impl From<ComponentRef> for Attachment {
    fn from(component: ComponentRef) -> Self {
        Self::One(component)
    }
}

impl From<Vec<ComponentRef>> for Attachment {
    fn from(components: Vec<ComponentRef>) -> Self {
        Self::Many(components)
    }
}

impl<const N: usize> From<[ComponentRef; N]> for Attachment {
    fn from(components: [ComponentRef; N]) -> Self {
        Self::Many(components.into())
    }
}

/// Call-style sugar over [`Broadcastable`].
///
/// ```
/// use comfy_component::{BroadcastExt, Component, Receiver};
/// use comfy_event::EventArgs;
///
/// let root = Component::spawn("Root");
/// root.connect(Receiver::spawn("ping", |_| Ok(())))?;
/// root.invoke(EventArgs::new().arg("ping", 1))?;
/// # Ok::<(), comfy_component::ComponentError>(())
/// ```
pub trait BroadcastExt: Broadcastable {
    /// Alias for [`attach`](Broadcastable::attach) accepting one component
    /// or a list.
    ///
    /// # Errors
    ///
    /// Same as [`attach`](Broadcastable::attach).
    fn connect(&self, target: impl Into<Attachment>) -> Result<Vec<ComponentRef>, ComponentError> {
        self.attach(&target.into().into_vec())
    }

    /// Alias for [`event`](Broadcastable::event).
    ///
    /// # Errors
    ///
    /// Same as [`event`](Broadcastable::event).
    fn invoke(&self, args: EventArgs) -> Result<(), ComponentError> {
        self.event(args)
    }
}

impl<T: Broadcastable + ?Sized> BroadcastExt for T {}
