//! Logging variants of the receiver and the component.
//!
//! # Record Formats
//!
//! | Source | Record |
//! |--------|--------|
//! | [`LoggingReceiver`] | `LOG: <ancestors> caught event: <name> > <values>` |
//! | [`LoggingComponent`] | `LOG: <component> received: <values>` |
//!
//! `<values>` is [`render_values`] of the event's positional values, so a
//! broadcast of `move = [-1, -1]` renders as `-1, -1`.
//!
//! # Wildcard Asymmetry
//!
//! A [`LoggingReceiver`] bound to `"*"` invokes its callback for every key
//! but, by default, logs nothing for those matches. Set
//! [`ComponentConfig::log_wildcard_matches`] to log them too.

use crate::receiver::{for_each_match, invoke};
use crate::sink::{console, SharedSink};
use crate::{
    Broadcastable, Callback, CallbackResult, ComponentConfig, ComponentError, ComponentRef, Node,
    Receiver,
};
use comfy_event::{render_values, EventSelector, Payload};
use comfy_types::ComponentId;
use serde_json::Value;
use std::sync::Arc;

/// Receiver that writes a log record before each callback invocation.
///
/// The record names where the receiver sits in the tree:
///
/// - ancestor tracking on: the names of every component it was attached to
/// - ancestor tracking off: the owner label set with [`with_owner`](Self::with_owner)
///
/// # Example
///
/// ```
/// use comfy_component::testing::MemorySink;
/// use comfy_component::{BroadcastExt, Component, ComponentRef, LoggingReceiver};
/// use comfy_event::EventArgs;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let sink = MemorySink::shared();
/// let receiver: ComponentRef =
///     Arc::new(LoggingReceiver::new("move", |_| Ok(())).with_sink(sink.clone()));
///
/// let movement = Component::spawn("Movement");
/// movement.connect(receiver)?;
/// movement.invoke(EventArgs::new().arg("move", json!([-1, -1])))?;
///
/// assert_eq!(sink.lines(), vec!["LOG: Movement caught event: move > -1, -1"]);
/// # Ok::<(), comfy_component::ComponentError>(())
/// ```
pub struct LoggingReceiver {
    id: ComponentId,
    node: Node,
    selector: EventSelector,
    callback: Callback,
    sink: SharedSink,
    owner: Option<String>,
    log_wildcard_matches: bool,
}

impl LoggingReceiver {
    /// Creates a logging receiver writing to the console.
    pub fn new<F>(selector: impl Into<EventSelector>, callback: F) -> Self
    where
        F: Fn(&[Value]) -> CallbackResult + Send + Sync + 'static,
    {
        Self::with_config(selector, callback, &ComponentConfig::default())
    }

    /// Creates a logging receiver using `config`.
    pub fn with_config<F>(
        selector: impl Into<EventSelector>,
        callback: F,
        config: &ComponentConfig,
    ) -> Self
    where
        F: Fn(&[Value]) -> CallbackResult + Send + Sync + 'static,
    {
        Self {
            id: ComponentId::new("LoggingReceiver"),
            node: Node::with_config(config),
            selector: selector.into(),
            callback: Arc::new(callback),
            sink: console(),
            owner: None,
            log_wildcard_matches: config.log_wildcard_matches,
        }
    }

    /// Replaces the sink.
    #[must_use]
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Sets the owner label used when ancestor tracking is off.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Returns the bound selector.
    #[must_use]
    pub fn selector(&self) -> &EventSelector {
        &self.selector
    }

    fn provenance(&self) -> String {
        if self.node.tracks_ancestors() {
            self.node.ancestor_names().join(", ")
        } else {
            self.owner.clone().unwrap_or_default()
        }
    }
}

impl Broadcastable for LoggingReceiver {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn dispatch(&self, payload: &Payload) -> Result<(), ComponentError> {
        let wildcard = self.selector.is_wildcard();
        for_each_match(&self.selector, payload, |event, values| {
            if !wildcard || self.log_wildcard_matches {
                self.sink.log(&format!(
                    "LOG: {} caught event: {} > {}",
                    self.provenance(),
                    event,
                    render_values(values)
                ));
            }
            invoke(&self.callback, event, values)
        })
    }
}

impl std::fmt::Debug for LoggingReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingReceiver")
            .field("id", &self.id)
            .field("selector", &self.selector)
            .field("owner", &self.owner)
            .field("log_wildcard_matches", &self.log_wildcard_matches)
            .finish_non_exhaustive()
    }
}

/// Component that logs every event flowing through it.
///
/// On construction it attaches a wildcard [`Receiver`] as its first child,
/// so each broadcast is logged once per event key before any other child
/// sees it.
///
/// # Example
///
/// ```
/// use comfy_component::testing::MemorySink;
/// use comfy_component::{Broadcastable, LoggingComponent};
/// use comfy_event::EventArgs;
///
/// let sink = MemorySink::shared();
/// let player = LoggingComponent::with_sink("Player", sink.clone());
///
/// player.event(EventArgs::new().arg("move", 5).arg("jump", true))?;
///
/// assert_eq!(
///     sink.lines(),
///     vec!["LOG: Player received: 5", "LOG: Player received: true"]
/// );
/// # Ok::<(), comfy_component::ComponentError>(())
/// ```
pub struct LoggingComponent {
    id: ComponentId,
    node: Node,
    sink: SharedSink,
}

impl LoggingComponent {
    /// Creates a logging component writing to the console.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sink(name, console())
    }

    /// Creates a logging component writing to `sink`.
    #[must_use]
    pub fn with_sink(name: impl Into<String>, sink: SharedSink) -> Self {
        Self::with_config(name, sink, &ComponentConfig::default())
    }

    /// Creates a logging component writing to `sink`, using `config`.
    #[must_use]
    pub fn with_config(
        name: impl Into<String>,
        sink: SharedSink,
        config: &ComponentConfig,
    ) -> Self {
        let id = ComponentId::new(name);
        let node = Node::with_config(config);

        let label = id.name.clone();
        let record_sink = Arc::clone(&sink);
        let logger = Receiver::with_config(
            EventSelector::Any,
            move |values: &[Value]| {
                let line = format!("LOG: {} received: {}", label, render_values(values));
                record_sink.log(&line);
                Ok(())
            },
            config,
        );
        node.link(&id, Arc::new(logger));

        Self { id, node, sink }
    }

    /// Creates a console-logging component and returns it as a shared reference.
    #[must_use]
    pub fn spawn(name: impl Into<String>) -> ComponentRef {
        Arc::new(Self::new(name))
    }

    /// Returns the sink records are written to.
    #[must_use]
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }
}

impl Broadcastable for LoggingComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }
}

impl std::fmt::Debug for LoggingComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingComponent")
            .field("id", &self.id)
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}
