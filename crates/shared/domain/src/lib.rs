//! # Domain
//!
//! Plain data shared by every packwise crate. Only `serde` is allowed here:
//! no I/O, no HTTP, no solver logic.

pub mod config;
pub mod constants;
pub mod registry;
