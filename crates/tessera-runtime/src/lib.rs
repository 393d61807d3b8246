//! TESSERA Runtime - Peripheral collaborators around the arbiter core
//!
//! This crate implements the peripheral collaborators of the protocol:
//! - Line-oriented record source
//! - Console narrator event sink
//! - Serialized run driver
//! - Tracing initialization

pub mod source;
pub mod narrator;
pub mod driver;
pub mod telemetry;

pub use source::*;
pub use narrator::*;
pub use driver::*;
pub use telemetry::*;
