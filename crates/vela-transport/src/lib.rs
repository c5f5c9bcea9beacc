//! VELA Transport - Adapters between the tracking pipeline and the network
//!
//! This crate provides:
//! - The non-blocking sink contract the drain worker sends through
//! - A connected UDP adapter (one tracking frame per datagram)
//! - A null adapter for sessions without an established connection
//! - An in-memory adapter for deterministic tests

pub mod mem;
pub mod null;
pub mod sink;
pub mod udp;

pub use mem::MemorySink;
pub use null::NullSink;
pub use sink::{SendOutcome, TrackingSink};
pub use udp::UdpSink;
