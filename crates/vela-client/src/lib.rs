//! VELA Client - Session lifecycle and the tracking submission pipeline
//!
//! This crate wires the pipeline together:
//! - The session lifecycle state machine
//! - Configuration resolution from the boundary directories
//! - Logging setup for the boundary log level
//! - The lifecycle coordinator owning the buffer and the drain worker

pub mod client;
pub mod config;
pub mod logging;
pub mod session;

pub use client::ClientCore;
pub use config::{ClientConfig, CONFIG_FILE_NAME};
pub use logging::init_logging;
pub use session::{SessionMachine, SessionState, Transition};
