//! Terminal component that matches event names and invokes a callback.
//!
//! # Matching
//!
//! | Selector | Broadcast `{move: [-1, -1], jump: [5]}` |
//! |----------|------------------------------------------|
//! | `"move"` | `callback(-1, -1)` once |
//! | `"*"` | `callback(-1, -1)`, then `callback(5)` |
//! | `"dash"` | nothing |
//!
//! A receiver never forwards a broadcast to its own children, even if some
//! were attached. Nothing is remembered between broadcasts.

use crate::error::CallbackError;
use crate::{Broadcastable, ComponentConfig, ComponentError, ComponentRef, Node};
use comfy_event::{EventSelector, Payload};
use comfy_types::ComponentId;
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

/// Result a callback returns.
pub type CallbackResult = Result<(), CallbackError>;

/// Function invoked with the positional values of a matched event.
///
/// An event broadcast as `move = 5` arrives as `&[5]`; one broadcast as
/// `move = [-1, -1]` arrives as `&[-1, -1]`. Missing trailing values are the
/// callback's to default.
pub type Callback = Arc<dyn Fn(&[Value]) -> CallbackResult + Send + Sync>;

/// Leaf component bound to one event name or to `"*"`.
///
/// # Example
///
/// ```
/// use comfy_component::{Broadcastable, Receiver};
/// use comfy_event::EventArgs;
/// use serde_json::json;
///
/// let receiver = Receiver::new("move", |args| {
///     let x = args[0].as_i64().unwrap_or(0);
///     let y = args.get(1).and_then(|v| v.as_i64()).unwrap_or(0);
///     assert_eq!((x, y), (5, 0));
///     Ok(())
/// });
///
/// receiver.event(EventArgs::new().arg("move", 5))?;
/// # Ok::<(), comfy_component::ComponentError>(())
/// ```
pub struct Receiver {
    id: ComponentId,
    node: Node,
    selector: EventSelector,
    callback: Callback,
}

impl Receiver {
    /// Creates a receiver with the default configuration.
    ///
    /// `selector` accepts a string; `"*"` selects every event.
    pub fn new<F>(selector: impl Into<EventSelector>, callback: F) -> Self
    where
        F: Fn(&[Value]) -> CallbackResult + Send + Sync + 'static,
    {
        Self::with_config(selector, callback, &ComponentConfig::default())
    }

    /// Creates a receiver using `config`.
    pub fn with_config<F>(
        selector: impl Into<EventSelector>,
        callback: F,
        config: &ComponentConfig,
    ) -> Self
    where
        F: Fn(&[Value]) -> CallbackResult + Send + Sync + 'static,
    {
        Self {
            id: ComponentId::new("Receiver"),
            node: Node::with_config(config),
            selector: selector.into(),
            callback: Arc::new(callback),
        }
    }

    /// Creates a receiver and returns it as a shared reference.
    pub fn spawn<F>(selector: impl Into<EventSelector>, callback: F) -> ComponentRef
    where
        F: Fn(&[Value]) -> CallbackResult + Send + Sync + 'static,
    {
        Arc::new(Self::new(selector, callback))
    }

    /// Returns the bound selector.
    #[must_use]
    pub fn selector(&self) -> &EventSelector {
        &self.selector
    }
}

impl Broadcastable for Receiver {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn dispatch(&self, payload: &Payload) -> Result<(), ComponentError> {
        for_each_match(&self.selector, payload, |event, values| {
            invoke(&self.callback, event, values)
        })
    }
}

impl std::fmt::Debug for Receiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver")
            .field("id", &self.id)
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

/// Calls `on_match` for every entry of `payload` selected by `selector`.
///
/// Wildcard: once per key, in payload order. Named: at most once.
pub(crate) fn for_each_match<F>(
    selector: &EventSelector,
    payload: &Payload,
    mut on_match: F,
) -> Result<(), ComponentError>
where
    F: FnMut(&str, &[Value]) -> Result<(), ComponentError>,
{
    match selector {
        EventSelector::Any => {
            for entry in payload {
                on_match(&entry.name, &entry.values)?;
            }
            Ok(())
        }
        EventSelector::Named(name) => match payload.get(name) {
            Some(values) => on_match(name, values),
            None => Ok(()),
        },
    }
}

pub(crate) fn invoke(
    callback: &Callback,
    event: &str,
    values: &[Value],
) -> Result<(), ComponentError> {
    trace!("invoke callback for {} with {} value(s)", event, values.len());
    callback(values).map_err(|err| ComponentError::callback(event, err))
}
