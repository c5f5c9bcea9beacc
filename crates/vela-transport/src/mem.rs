//! In-memory transport for tests
//!
//! Plays the part of the remote render host: records every delivered
//! sample, stalls on demand via a grantable send budget, and can be
//! closed to exercise the transport-gone path.

use std::sync::Arc;

use parking_lot::Mutex;

use vela_core::TrackingSample;

use crate::sink::{SendOutcome, TrackingSink};

#[derive(Debug, Default)]
struct MemoryState {
    delivered: Vec<TrackingSample>,
    /// Remaining sends before WouldBlock; None means unlimited
    budget: Option<usize>,
    closed: bool,
}

/// Cloneable in-memory sink; all clones share delivery state
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySink {
    /// Sink that accepts every sample
    pub fn unbounded() -> Self {
        MemorySink::default()
    }

    /// Sink that accepts `budget` samples, then reports `WouldBlock`
    /// until more budget is granted
    pub fn with_budget(budget: usize) -> Self {
        let sink = MemorySink::default();
        sink.state.lock().budget = Some(budget);
        sink
    }

    /// Allow `count` more sends through a budgeted sink
    pub fn grant(&self, count: usize) {
        let mut state = self.state.lock();
        if let Some(budget) = state.budget.as_mut() {
            *budget += count;
        }
    }

    /// Simulate the transport going away
    pub fn close(&self) {
        self.state.lock().closed = true;
    }

    /// Samples delivered so far, in send order
    pub fn delivered(&self) -> Vec<TrackingSample> {
        self.state.lock().delivered.clone()
    }

    pub fn delivered_len(&self) -> usize {
        self.state.lock().delivered.len()
    }
}

impl TrackingSink for MemorySink {
    fn try_send(&mut self, sample: &TrackingSample) -> SendOutcome {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if state.closed {
            return SendOutcome::Closed;
        }
        match state.budget.as_mut() {
            Some(0) => SendOutcome::WouldBlock,
            Some(budget) => {
                *budget -= 1;
                state.delivered.push(sample.clone());
                SendOutcome::Sent
            }
            None => {
                state.delivered.push(sample.clone());
                SendOutcome::Sent
            }
        }
    }
}
