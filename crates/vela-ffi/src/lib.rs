#![allow(clippy::missing_safety_doc)]
//! VELA FFI - C boundary for the tracking client
//!
//! The published surface is void-returning and process-global: usage
//! errors degrade to logged no-ops, resource errors leave the process
//! uninitialized, and drop/backpressure behavior is observable only
//! through the logging collaborator. The matching C header lives under
//! `include/`.

pub mod session;
pub mod types;

pub use session::*;
pub use types::*;
