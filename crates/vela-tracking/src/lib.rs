//! VELA Tracking - Bounded sample buffering
//!
//! The holding area between the high-frequency sampling producer and the
//! transport drain:
//! - Fixed capacity, drop-oldest on overflow
//! - FIFO by arrival, never sorted by timestamp
//! - Drop and ordering counters for internal observability

pub mod queue;
pub mod stats;

pub use queue::{PushOutcome, SampleQueue, DEFAULT_QUEUE_CAPACITY};
pub use stats::TrackingStats;
