//! Core types for the comfy component framework.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  comfy-types     : ComponentId, ErrorCode       ◄── HERE    │
//! │  comfy-event     : EventArgs, Payload, EventSelector        │
//! │  comfy-component : Broadcastable, Component, Receiver, ...  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use comfy_types::ComponentId;
//!
//! let player = ComponentId::new("Player");
//! assert_eq!(player.name, "Player");
//! ```

mod error;
mod id;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::ComponentId;
