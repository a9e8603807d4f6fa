//! Component trees with named-event broadcast.
//!
//! Components form a tree. Broadcasting into any member delivers a set of
//! named events to its whole subtree, depth-first. Leaves called receivers
//! match event names and run callbacks with the event's positional values.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  comfy-types     : ComponentId, ErrorCode                   │
//! │  comfy-event     : EventArgs, Payload, EventSelector        │
//! │  comfy-component : Broadcastable, Receiver, logging ◄── HERE│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Broadcast Flow
//!
//! ```text
//! player.event(move = [-1, -1])
//!   │  normalize once: {move: [-1, -1]}
//!   ▼
//! ┌──────────────────┐
//! │ Player           │ forward, in attach order
//! └──────────────────┘
//!   ├──► Receiver("*")          logs "LOG: Player received: -1, -1"
//!   └──► Movement
//!          └──► LoggingReceiver("move")
//!                 logs "LOG: Movement caught event: move > -1, -1"
//!                 callback(-1, -1)
//! ```
//!
//! Normalization turns every value into a sequence: a JSON array is kept,
//! anything else is wrapped, so `move = 5` reaches callbacks as `[5]`.
//!
//! # Core Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Broadcastable`] | Trait every tree member implements |
//! | [`Node`] | Child list and ancestor record embedded in each member |
//! | [`Component`] | Plain branch, forwards to children |
//! | [`Receiver`] | Leaf, invokes a callback on matching events |
//! | [`LoggingReceiver`] | Receiver that logs each match first |
//! | [`LoggingComponent`] | Branch that logs every event it forwards |
//!
//! # Example
//!
//! ```
//! use comfy_component::{BroadcastExt, Component, Receiver};
//! use comfy_event::EventArgs;
//! use parking_lot::Mutex;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let position = Arc::new(Mutex::new((0, 0)));
//! let target = Arc::clone(&position);
//!
//! let player = Component::spawn("Player");
//! player.connect(Receiver::spawn("move", move |args| {
//!     let x = args.first().and_then(|v| v.as_i64()).unwrap_or(0);
//!     let y = args.get(1).and_then(|v| v.as_i64()).unwrap_or(0);
//!     let mut pos = target.lock();
//!     pos.0 += x;
//!     pos.1 += y;
//!     Ok(())
//! }))?;
//!
//! player.invoke(EventArgs::new().arg("move", json!([-1, -1])))?;
//! player.invoke(EventArgs::new().arg("move", 5))?;
//!
//! assert_eq!(*position.lock(), (4, -1));
//! # Ok::<(), comfy_component::ComponentError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`Broadcastable`], [`BroadcastExt`], [`Attachment`] - Broadcast traits
//! - [`Component`], [`Receiver`] - Plain tree members
//! - [`LoggingComponent`], [`LoggingReceiver`] - Logging tree members
//! - [`LogSink`], [`ConsoleSink`], [`TracingSink`] - Log destinations
//! - [`ComponentConfig`] - Per-member configuration
//! - [`ComponentError`] - Error types
//! - [`testing`] - Recorders and harnesses for tests
//!
//! # Related Crates
//!
//! - [`comfy_types`] - Identifier and error-code types
//! - [`comfy_event`] - Event arguments and normalized payloads

mod component;
mod config;
mod error;
mod logging;
mod node;
mod receiver;
mod sink;
pub mod testing;
mod traits;

// Re-export broadcast traits
pub use traits::{Attachment, BroadcastExt, Broadcastable, ComponentRef};

// Re-export tree members
pub use component::Component;
pub use logging::{LoggingComponent, LoggingReceiver};
pub use node::Node;
pub use receiver::{Callback, CallbackResult, Receiver};

// Re-export sinks
pub use sink::{console, ConsoleSink, LogSink, SharedSink, TracingSink};

// Re-export configuration
pub use config::ComponentConfig;

// Re-export error types
pub use error::{CallbackError, ComponentError};

// Re-export argument types for convenience
pub use comfy_event::{EventArgs, EventSelector};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallRecorder;
    use comfy_types::{ComponentId, ErrorCode};
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::sync::Arc;

    /// Branch that keeps a counter of broadcasts it forwarded.
    struct Counter {
        id: ComponentId,
        node: Node,
        seen: Mutex<usize>,
    }

    impl Counter {
        fn new(name: &str) -> Self {
            Self {
                id: ComponentId::new(name),
                node: Node::new(),
                seen: Mutex::new(0),
            }
        }
    }

    impl Broadcastable for Counter {
        fn id(&self) -> &ComponentId {
            &self.id
        }

        fn node(&self) -> &Node {
            &self.node
        }

        fn dispatch(&self, payload: &comfy_event::Payload) -> Result<(), ComponentError> {
            *self.seen.lock() += 1;
            self.node.forward(payload)
        }
    }

    #[test]
    fn custom_member_overrides_dispatch() {
        let recorder = CallRecorder::new();
        let counter = Arc::new(Counter::new("Counter"));
        counter
            .connect(Receiver::spawn("tick", recorder.callback()))
            .expect("acyclic attach should succeed");

        let root = Component::spawn("Root");
        root.connect(Arc::clone(&counter) as ComponentRef)
            .expect("acyclic attach should succeed");

        root.invoke(EventArgs::new().arg("tick", 1))
            .expect("broadcast should succeed");
        root.invoke(EventArgs::new().arg("other", 1))
            .expect("broadcast should succeed");

        assert_eq!(*counter.seen.lock(), 2);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn nested_component_error_not_rewrapped() {
        let inner = Component::spawn("Inner");
        let weak_inner = Arc::downgrade(&inner);
        let root = Component::spawn("Root");
        root.connect(Receiver::spawn("grow", move |_: &[Value]| {
            if let Some(inner) = weak_inner.upgrade() {
                inner.attach(&[Arc::clone(&inner)])?;
            }
            Ok(())
        }))
        .expect("acyclic attach should succeed");

        let err = root
            .invoke(EventArgs::new().arg("grow", json!(null)))
            .expect_err("self attach inside callback fails");

        assert_eq!(err.code(), "COMPONENT_CYCLE_DETECTED");
    }

    #[test]
    fn broadcast_from_subtree_reaches_only_subtree() {
        let recorder = CallRecorder::new();
        let root = Component::spawn("Root");
        let branch = Component::spawn("Branch");
        root.connect(vec![
            Receiver::spawn("go", recorder.tagged("root")),
            Arc::clone(&branch),
        ])
        .expect("acyclic attach should succeed");
        branch
            .connect(Receiver::spawn("go", recorder.tagged("branch")))
            .expect("acyclic attach should succeed");

        branch
            .invoke(EventArgs::new().arg("go", 1))
            .expect("broadcast should succeed");

        assert_eq!(recorder.tags(), vec!["branch"]);
    }
}
