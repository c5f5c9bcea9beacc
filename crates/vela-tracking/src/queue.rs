//! Bounded drop-oldest sample queue
//!
//! Tracking data is ephemeral: a stale pose is worse than a dropped one.
//! When the queue is full the oldest sample is evicted, never the newest,
//! and a push is always O(1).

use std::collections::VecDeque;

use vela_core::{SampleTimestamp, TrackingSample};

use crate::stats::TrackingStats;

/// Default capacity: enough to absorb a brief transport stall without
/// accumulating latency.
pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

/// Outcome of a push
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    Stored,
    /// Stored, and the oldest buffered sample was evicted to make room
    EvictedOldest,
}

/// Bounded FIFO holding area between the sampling producer and the
/// transport drain
///
/// Samples drain in arrival order. Timestamps that run behind their
/// predecessor are accepted (clock jitter happens) and counted; final
/// timestamp reconciliation belongs to the remote host.
#[derive(Debug)]
pub struct SampleQueue {
    samples: VecDeque<TrackingSample>,
    capacity: usize,
    last_push: Option<SampleTimestamp>,
    stats: TrackingStats,
}

impl SampleQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        SampleQueue {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            last_push: None,
            stats: TrackingStats::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample, evicting the oldest buffered one when full
    pub fn push(&mut self, sample: TrackingSample) -> PushOutcome {
        self.stats.submitted += 1;

        if let Some(last) = self.last_push {
            if sample.target_timestamp_ns < last {
                self.stats.out_of_order += 1;
                tracing::debug!(
                    ts = ?sample.target_timestamp_ns,
                    previous = ?last,
                    "accepted out-of-order tracking sample"
                );
            }
        }
        self.last_push = Some(sample.target_timestamp_ns);

        let outcome = if self.samples.len() == self.capacity {
            self.samples.pop_front();
            self.stats.evicted += 1;
            PushOutcome::EvictedOldest
        } else {
            PushOutcome::Stored
        };
        self.samples.push_back(sample);
        outcome
    }

    /// Take the oldest buffered sample
    pub fn pop(&mut self) -> Option<TrackingSample> {
        self.samples.pop_front()
    }

    /// Put an in-flight sample back at the head after a transport stall
    ///
    /// If the queue refilled in the meantime the sample is dropped: it is
    /// the oldest data in the pipeline and loses to everything newer.
    pub fn requeue_front(&mut self, sample: TrackingSample) {
        self.stats.send_retries += 1;
        if self.samples.len() == self.capacity {
            self.stats.evicted += 1;
            return;
        }
        self.samples.push_front(sample);
    }

    /// Discard all pending samples, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let dropped = self.samples.len();
        self.samples.clear();
        dropped
    }

    /// Counter snapshot
    #[inline]
    pub fn stats(&self) -> TrackingStats {
        self.stats
    }

    pub fn record_sent(&mut self) {
        self.stats.sent += 1;
    }

    pub fn record_dropped_closed(&mut self, count: u64) {
        self.stats.dropped_closed += count;
    }

    pub fn record_rejected_destroyed(&mut self) {
        self.stats.rejected_destroyed += 1;
    }
}

impl Default for SampleQueue {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vela_core::DeviceMotions;

    fn sample(millis: u64) -> TrackingSample {
        TrackingSample::new(SampleTimestamp::from_millis(millis), DeviceMotions::default())
    }

    #[test]
    fn test_fifo_order_when_not_full() {
        let mut queue = SampleQueue::new(4);
        for ms in [1, 2, 3] {
            assert_eq!(queue.push(sample(ms)), PushOutcome::Stored);
        }
        let drained: Vec<u64> = std::iter::from_fn(|| queue.pop())
            .map(|s| s.target_timestamp_ns.as_millis())
            .collect();
        assert_eq!(drained, vec![1, 2, 3]);
    }

    #[test]
    fn test_overflow_evicts_oldest_never_newest() {
        let mut queue = SampleQueue::new(3);
        for ms in 1..=3 {
            queue.push(sample(ms));
        }
        assert_eq!(queue.push(sample(4)), PushOutcome::EvictedOldest);

        let drained: Vec<u64> = std::iter::from_fn(|| queue.pop())
            .map(|s| s.target_timestamp_ns.as_millis())
            .collect();
        assert_eq!(drained, vec![2, 3, 4]);
        assert_eq!(queue.stats().evicted, 1);
        assert_eq!(queue.stats().submitted, 4);
    }

    #[test]
    fn test_out_of_order_accepted_and_counted() {
        let mut queue = SampleQueue::new(4);
        queue.push(sample(10));
        queue.push(sample(5));
        queue.push(sample(12));
        assert_eq!(queue.stats().out_of_order, 1);

        // FIFO by arrival: the late sample keeps its slot.
        let drained: Vec<u64> = std::iter::from_fn(|| queue.pop())
            .map(|s| s.target_timestamp_ns.as_millis())
            .collect();
        assert_eq!(drained, vec![10, 5, 12]);
    }

    #[test]
    fn test_requeue_front_restores_head() {
        let mut queue = SampleQueue::new(4);
        queue.push(sample(1));
        queue.push(sample(2));

        let in_flight = queue.pop().unwrap();
        queue.requeue_front(in_flight);

        assert_eq!(queue.pop().unwrap().target_timestamp_ns.as_millis(), 1);
        assert_eq!(queue.stats().send_retries, 1);
    }

    #[test]
    fn test_requeue_front_drops_when_refilled() {
        let mut queue = SampleQueue::new(2);
        queue.push(sample(1));
        queue.push(sample(2));

        let in_flight = queue.pop().unwrap();
        queue.push(sample(3));
        queue.push(sample(4)); // queue full again

        queue.requeue_front(in_flight);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().unwrap().target_timestamp_ns.as_millis(), 3);
        // One eviction from the refill, one from the dropped requeue.
        assert_eq!(queue.stats().evicted, 2);
    }

    #[test]
    fn test_capacity_clamped_to_one() {
        let mut queue = SampleQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        queue.push(sample(1));
        queue.push(sample(2));
        assert_eq!(queue.pop().unwrap().target_timestamp_ns.as_millis(), 2);
    }

    #[test]
    fn test_clear_reports_dropped() {
        let mut queue = SampleQueue::new(4);
        queue.push(sample(1));
        queue.push(sample(2));
        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
    }

    proptest! {
        /// Whatever the submission pattern, the drain is the newest
        /// min(n, capacity) samples in submission order.
        #[test]
        fn drains_newest_window_in_order(
            timestamps in proptest::collection::vec(any::<u32>(), 0..64),
            capacity in 1usize..12,
        ) {
            let mut queue = SampleQueue::new(capacity);
            for &ts in &timestamps {
                queue.push(sample(ts as u64));
            }

            let drained: Vec<u64> = std::iter::from_fn(|| queue.pop())
                .map(|s| s.target_timestamp_ns.as_millis())
                .collect();

            let start = timestamps.len().saturating_sub(capacity);
            let expected: Vec<u64> = timestamps[start..].iter().map(|&t| t as u64).collect();
            prop_assert_eq!(drained, expected);
        }
    }
}
