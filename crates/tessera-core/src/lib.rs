//! TESSERA Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the TESSERA arbiter:
//! - Identifiers (NodeId, Timestamp, RequestStamp)
//! - Per-node protocol state
//! - Protocol events and the event sink seam
//! - Error taxonomy

pub mod id;
pub mod node;
pub mod event;
pub mod error;

pub use id::*;
pub use node::*;
pub use event::*;
pub use error::*;
