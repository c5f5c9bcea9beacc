//! Pipeline counters

/// Tracking pipeline counters
///
/// Internal observability for drop and ordering behavior. Nothing here is
/// exposed across the client boundary; the submission call stays
/// fire-and-forget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackingStats {
    /// Samples offered to the buffer
    pub submitted: u64,
    /// Oldest-sample evictions caused by a full buffer
    pub evicted: u64,
    /// Accepted samples whose timestamp ran behind their predecessor
    pub out_of_order: u64,
    /// Samples delivered to the transport
    pub sent: u64,
    /// Transport stalls that requeued the in-flight sample
    pub send_retries: u64,
    /// Samples discarded after the transport closed
    pub dropped_closed: u64,
    /// Submissions refused after teardown
    pub rejected_destroyed: u64,
}

impl TrackingStats {
    /// Samples that left the pipeline without reaching the transport
    pub fn dropped(&self) -> u64 {
        self.evicted + self.dropped_closed + self.rejected_destroyed
    }
}
