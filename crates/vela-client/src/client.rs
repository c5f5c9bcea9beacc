//! Lifecycle coordinator and drain worker
//!
//! `ClientCore` is the session context object behind the boundary: it
//! owns the state machine, the bounded sample buffer and the drain
//! worker, and enforces call ordering. The sampling producer only ever
//! touches `submit`, which stays bounded-time; all network I/O happens
//! on the drain task.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;

use vela_core::{TrackingSample, VelaError};
use vela_tracking::{SampleQueue, TrackingStats};
use vela_transport::{SendOutcome, TrackingSink};

use crate::config::ClientConfig;
use crate::session::{SessionMachine, SessionState, Transition};

struct Shared {
    machine: Mutex<SessionMachine>,
    queue: Mutex<SampleQueue>,
    wake: Notify,
}

/// The session context object behind the client boundary
///
/// Constructed by the initialize path; its existence is the proof the
/// session was initialized, so the invalid uninitialized-submission
/// state is unrepresentable here and handled only at the FFI seam.
pub struct ClientCore {
    shared: Arc<Shared>,
    worker: tokio::task::JoinHandle<()>,
}

impl ClientCore {
    /// Allocate the pipeline and spawn the drain worker
    ///
    /// The session starts paused; `resume` unfreezes the drain.
    pub fn start(
        config: &ClientConfig,
        sink: Box<dyn TrackingSink>,
        runtime: &tokio::runtime::Handle,
    ) -> Self {
        let shared = Arc::new(Shared {
            machine: Mutex::new(SessionMachine::initialized()),
            queue: Mutex::new(SampleQueue::new(config.queue_capacity)),
            wake: Notify::new(),
        });
        let worker = runtime.spawn(drain_loop(
            Arc::clone(&shared),
            sink,
            config.send_backoff(),
        ));
        tracing::info!(
            queue_capacity = config.queue_capacity,
            "tracking session initialized"
        );
        ClientCore { shared, worker }
    }

    pub fn state(&self) -> SessionState {
        self.shared.machine.lock().state()
    }

    /// Unfreeze the drain
    pub fn resume(&self) {
        let transition = self.shared.machine.lock().resume();
        match transition {
            Transition::Entered(_) => {
                tracing::info!("tracking session resumed");
                self.shared.wake.notify_one();
            }
            Transition::NoOp => tracing::debug!("resume: session already active"),
            Transition::Rejected => tracing::warn!("resume ignored: session destroyed"),
        }
    }

    /// Suspend the drain; the buffer keeps absorbing samples
    pub fn pause(&self) {
        let transition = self.shared.machine.lock().pause();
        match transition {
            Transition::Entered(_) => {
                tracing::info!("tracking session paused");
                self.shared.wake.notify_one();
            }
            Transition::NoOp => tracing::debug!("pause: session already paused"),
            Transition::Rejected => tracing::warn!("pause ignored: session destroyed"),
        }
    }

    /// Producer entry point: bounded time, never blocks on the network
    ///
    /// Returns whether the sample entered the buffer. The boundary
    /// discards the return value; it exists for internal observability.
    pub fn submit(&self, sample: TrackingSample) -> bool {
        let accepts = self.shared.machine.lock().accepts_samples();
        if !accepts {
            self.shared.queue.lock().record_rejected_destroyed();
            tracing::trace!("{}; tracking sample rejected", VelaError::SessionDestroyed);
            return false;
        }
        self.shared.queue.lock().push(sample);
        self.shared.wake.notify_one();
        true
    }

    /// Idempotent teardown
    ///
    /// Pending samples are discarded (stale by definition) and the drain
    /// worker exits on its next wakeup; an in-flight send completes or
    /// requeues against its own handle and is then dropped with the
    /// queue.
    pub fn destroy(&self) {
        let transition = self.shared.machine.lock().destroy();
        match transition {
            Transition::Entered(_) => {
                let dropped = self.shared.queue.lock().clear();
                self.shared.wake.notify_one();
                tracing::info!(dropped, "tracking session destroyed");
            }
            Transition::NoOp | Transition::Rejected => {
                tracing::debug!("destroy: session already destroyed")
            }
        }
    }

    /// Samples currently buffered
    pub fn pending(&self) -> usize {
        self.shared.queue.lock().len()
    }

    /// Counter snapshot
    pub fn stats(&self) -> TrackingStats {
        self.shared.queue.lock().stats()
    }

    /// True once the drain worker has exited
    pub fn is_shut_down(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the drain worker to exit; call after `destroy`
    pub async fn join(self) {
        let _ = self.worker.await;
    }
}

async fn drain_loop(shared: Arc<Shared>, mut sink: Box<dyn TrackingSink>, backoff: Duration) {
    let mut transport_closed = false;
    loop {
        let state = shared.machine.lock().state();
        match state {
            SessionState::Destroyed => break,
            SessionState::Uninitialized | SessionState::Paused => {
                shared.wake.notified().await;
                continue;
            }
            SessionState::Active => {}
        }

        let sample = shared.queue.lock().pop();
        let Some(sample) = sample else {
            shared.wake.notified().await;
            continue;
        };

        if transport_closed {
            shared.queue.lock().record_dropped_closed(1);
            continue;
        }

        match sink.try_send(&sample) {
            SendOutcome::Sent => shared.queue.lock().record_sent(),
            SendOutcome::WouldBlock => {
                shared.queue.lock().requeue_front(sample);
                tokio::time::sleep(backoff).await;
            }
            SendOutcome::Closed => {
                transport_closed = true;
                shared.queue.lock().record_dropped_closed(1);
                tracing::warn!("tracking transport closed; dropping samples until teardown");
            }
        }
    }
    tracing::debug!("drain worker stopped");
}
