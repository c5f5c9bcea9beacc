//! Error types for the VELA client core

use thiserror::Error;

/// Core client errors
///
/// The boundary surface is void-returning; these values exist so internal
/// layers can propagate failures to the logging collaborator.
#[derive(Error, Debug)]
pub enum VelaError {
    // Wire errors
    #[error("Invalid wire format: {0}")]
    InvalidWireFormat(String),

    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Unsupported wire version: {0}")]
    UnsupportedWireVersion(u8),

    #[error("Unknown packet kind: {0}")]
    UnknownPacketKind(u8),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Session errors
    #[error("Session already initialized")]
    AlreadyInitialized,

    #[error("Session not initialized")]
    NotInitialized,

    #[error("Session destroyed")]
    SessionDestroyed,

    // Transport errors
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Result type for client operations
pub type VelaResult<T> = Result<T, VelaError>;
