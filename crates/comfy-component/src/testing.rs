//! Testing helpers for component trees.
//!
//! Lets you build a tree, broadcast into it, and inspect what the
//! callbacks saw and what the logging variants wrote, without a console.
//!
//! # Features
//!
//! - [`CallRecorder`]: callbacks that record their arguments
//! - [`MemorySink`]: a [`LogSink`] that buffers records
//! - [`BroadcastHarness`]: broadcasts into a root and keeps a serializable log
//!
//! # Example
//!
//! ```
//! use comfy_component::testing::{BroadcastHarness, CallRecorder};
//! use comfy_component::{BroadcastExt, Component, Receiver};
//! use comfy_event::EventArgs;
//! use serde_json::json;
//!
//! let recorder = CallRecorder::new();
//! let root = Component::spawn("Root");
//! root.connect(Receiver::spawn("move", recorder.callback()))?;
//!
//! let mut harness = BroadcastHarness::new(root);
//! harness.broadcast(EventArgs::new().arg("move", json!([1, 2])))?;
//!
//! assert_eq!(recorder.values(), vec![vec![json!(1), json!(2)]]);
//! assert_eq!(harness.broadcast_log().len(), 1);
//! # Ok::<(), comfy_component::ComponentError>(())
//! ```

use crate::{CallbackResult, ComponentError, ComponentRef, LogSink};
use comfy_event::EventArgs;
use comfy_types::ErrorCode;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedCall {
    /// Label given to the callback by [`CallRecorder::tagged`].
    pub tag: String,
    /// Positional values the callback was invoked with.
    pub values: Vec<Value>,
}

/// Shared log of callback invocations.
///
/// Clones share the same log, so one recorder can back several callbacks
/// and the test keeps a handle to read it afterwards.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an untagged callback that records into this recorder.
    pub fn callback(&self) -> impl Fn(&[Value]) -> CallbackResult + Send + Sync + 'static {
        self.tagged("")
    }

    /// Returns a callback that records into this recorder under `tag`.
    pub fn tagged(
        &self,
        tag: impl Into<String>,
    ) -> impl Fn(&[Value]) -> CallbackResult + Send + Sync + 'static {
        let recorder = self.clone();
        let tag = tag.into();
        move |values: &[Value]| {
            recorder.record(&tag, values);
            Ok(())
        }
    }

    /// Appends one invocation.
    pub fn record(&self, tag: &str, values: &[Value]) {
        self.calls.lock().push(RecordedCall {
            tag: tag.to_string(),
            values: values.to_vec(),
        });
    }

    /// Returns the values of every invocation, in call order.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<Value>> {
        self.calls.lock().iter().map(|c| c.values.clone()).collect()
    }

    /// Returns the tag of every invocation, in call order.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.tag.clone()).collect()
    }

    /// Returns the number of invocations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Returns every invocation.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

/// Sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink behind an `Arc`, ready to hand to a component.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns a copy of the buffered records.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Returns the number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Returns `true` if nothing was logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drops every buffered record.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Record of one broadcast sent through a [`BroadcastHarness`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastRecord {
    /// Event names, in broadcast order.
    pub events: Vec<String>,
    /// Outcome of the broadcast.
    pub result: BroadcastResult,
}

/// Outcome of a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BroadcastResult {
    /// Every callback succeeded.
    Ok,
    /// A callback failed and the broadcast was aborted.
    Err {
        /// Error code of the failure.
        code: String,
        /// Error message.
        message: String,
    },
}

impl From<&Result<(), ComponentError>> for BroadcastResult {
    fn from(result: &Result<(), ComponentError>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(e) => Self::Err {
                code: e.code().to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// Broadcasts into a root component and logs each outcome.
///
/// The log is serializable for snapshot-style assertions.
pub struct BroadcastHarness {
    root: ComponentRef,
    log: Vec<BroadcastRecord>,
}

impl BroadcastHarness {
    /// Creates a harness around `root`.
    #[must_use]
    pub fn new(root: ComponentRef) -> Self {
        Self {
            root,
            log: Vec::new(),
        }
    }

    /// Returns the root component.
    #[must_use]
    pub fn root(&self) -> &ComponentRef {
        &self.root
    }

    /// Broadcasts `args` into the root and logs the outcome.
    ///
    /// # Errors
    ///
    /// Returns the broadcast's error, which is also logged.
    pub fn broadcast(&mut self, args: EventArgs) -> Result<(), ComponentError> {
        let events = args.names().map(str::to_string).collect();
        let result = self.root.event(args);
        self.log.push(BroadcastRecord {
            events,
            result: BroadcastResult::from(&result),
        });
        result
    }

    /// Returns every logged broadcast.
    #[must_use]
    pub fn broadcast_log(&self) -> &[BroadcastRecord] {
        &self.log
    }

    /// Drops the logged broadcasts.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}
