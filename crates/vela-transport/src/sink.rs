//! Sink contract for outbound tracking samples

use vela_core::TrackingSample;

/// Result of a non-blocking send attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The sample left for the network
    Sent,
    /// The transport cannot accept data right now; the caller keeps the
    /// sample queued
    WouldBlock,
    /// The transport is gone; subsequent sends are no-ops until an
    /// external layer establishes a new connection
    Closed,
}

/// Adapter handing tracking samples to the external network layer
///
/// `try_send` must return without blocking: the drain worker sits between
/// a real-time producer and the network and a stalled peer must surface
/// as `WouldBlock`, never as a hang. The adapter owns serialization of
/// the sample into wire bytes.
pub trait TrackingSink: Send {
    fn try_send(&mut self, sample: &TrackingSample) -> SendOutcome;
}
