//! VELA Wire Format - Tracking frame encoding
//!
//! This crate owns the byte layout of a tracking sample on the wire.
//! Encoding is deterministic and lossless with respect to the sample's
//! fields; float bit patterns round-trip exactly.

pub mod flags;
pub mod tracking;

pub use flags::TrackingFlags;
pub use tracking::*;
