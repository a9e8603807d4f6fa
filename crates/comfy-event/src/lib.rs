//! Event types for the comfy component framework.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  comfy-types     : ComponentId, ErrorCode                   │
//! │  comfy-event     : EventArgs, Payload, EventSelector ◄ HERE │
//! │  comfy-component : Broadcastable, Component, Receiver, ...  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Broadcast Data Flow
//!
//! ```text
//! caller
//!   │ EventArgs { move = [-1, -1], jump = 5 }
//!   ▼
//! normalize()  (once, at the entry point)
//!   │ Payload  { move: [-1, -1], jump: [5] }
//!   ▼
//! component ──► child ──► receiver("move") ─► callback(-1, -1)
//!           └─► child ──► receiver("*")    ─► callback(-1, -1), callback(5)
//! ```
//!
//! Values are `serde_json::Value`; no schema is imposed on them.
//!
//! # Usage
//!
//! ```
//! use comfy_event::{EventArgs, EventSelector};
//! use serde_json::json;
//!
//! let payload = EventArgs::new().arg("move", json!([-1, -1])).normalize();
//! let selector = EventSelector::parse("move");
//!
//! let matched: Vec<_> = payload
//!     .iter()
//!     .filter(|entry| selector.matches(&entry.name))
//!     .collect();
//! assert_eq!(matched.len(), 1);
//! ```

mod args;
mod error;
mod payload;
mod selector;

pub use args::EventArgs;
pub use error::EventError;
pub use payload::{render_values, Payload, PayloadEntry};
pub use selector::{EventSelector, WILDCARD};
