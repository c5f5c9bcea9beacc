//! Session lifecycle state machine

/// Session lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Before initialize; only the protocol identity query is valid
    Uninitialized,
    /// Initialized with the drain suspended
    Paused,
    /// Initialized with the drain running
    Active,
    /// Terminal; no further lifecycle or submission calls are valid
    Destroyed,
}

/// Result of a requested transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The state changed
    Entered(SessionState),
    /// The request was already satisfied; nothing changed
    NoOp,
    /// The request is invalid in the current state
    Rejected,
}

/// Pure transition table for the session lifecycle
///
/// Owns no resources and performs no I/O. The coordinator decides how
/// loudly to report `NoOp` and `Rejected` results; usage errors never
/// crash and never corrupt the state.
#[derive(Clone, Copy, Debug)]
pub struct SessionMachine {
    state: SessionState,
}

impl SessionMachine {
    /// Machine before any initialize call
    pub fn new() -> Self {
        SessionMachine {
            state: SessionState::Uninitialized,
        }
    }

    /// Machine for a freshly initialized session
    pub fn initialized() -> Self {
        SessionMachine {
            state: SessionState::Paused,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// One-time setup; repeated initialize keeps the existing session
    pub fn initialize(&mut self) -> Transition {
        match self.state {
            SessionState::Uninitialized => {
                self.state = SessionState::Paused;
                Transition::Entered(SessionState::Paused)
            }
            SessionState::Paused | SessionState::Active => Transition::NoOp,
            SessionState::Destroyed => Transition::Rejected,
        }
    }

    pub fn resume(&mut self) -> Transition {
        match self.state {
            SessionState::Paused => {
                self.state = SessionState::Active;
                Transition::Entered(SessionState::Active)
            }
            SessionState::Active => Transition::NoOp,
            SessionState::Uninitialized | SessionState::Destroyed => Transition::Rejected,
        }
    }

    pub fn pause(&mut self) -> Transition {
        match self.state {
            SessionState::Active => {
                self.state = SessionState::Paused;
                Transition::Entered(SessionState::Paused)
            }
            SessionState::Paused => Transition::NoOp,
            SessionState::Uninitialized | SessionState::Destroyed => Transition::Rejected,
        }
    }

    /// Teardown; safe even if resume or pause were never called
    pub fn destroy(&mut self) -> Transition {
        match self.state {
            SessionState::Paused | SessionState::Active => {
                self.state = SessionState::Destroyed;
                Transition::Entered(SessionState::Destroyed)
            }
            SessionState::Destroyed => Transition::NoOp,
            SessionState::Uninitialized => Transition::Rejected,
        }
    }

    /// Whether the buffer accepts new samples
    ///
    /// A paused session keeps accepting: the bounded ring holds the
    /// freshest samples and drains them on resume.
    #[inline]
    pub fn accepts_samples(&self) -> bool {
        matches!(self.state, SessionState::Paused | SessionState::Active)
    }

    /// Whether the drain may hand samples to the transport
    #[inline]
    pub fn drains(&self) -> bool {
        matches!(self.state, SessionState::Active)
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}
