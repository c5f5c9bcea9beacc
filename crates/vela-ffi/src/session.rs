//! FFI session functions
//!
//! The boundary owns the one process-wide session slot. The safe
//! `ClientCore` stays the explicit context object; the global exists
//! only at this seam because the published header carries no handle.

use std::ffi::{c_char, c_int, CStr};
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;

use parking_lot::Mutex;

use vela_client::{init_logging, ClientConfig, ClientCore};
use vela_core::{LogLevel, VelaError};
use vela_transport::{NullSink, TrackingSink, UdpSink};

use crate::types::VelaTracking;

struct FfiSession {
    runtime: tokio::runtime::Runtime,
    core: ClientCore,
}

static SESSION: Mutex<Option<FfiSession>> = Mutex::new(None);

static SEND_BEFORE_INIT_WARNING: Once = Once::new();

unsafe fn dir_from_raw(ptr: *const c_char) -> Option<PathBuf> {
    if ptr.is_null() {
        return None;
    }
    match CStr::from_ptr(ptr).to_str() {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring non-UTF-8 config directory");
            None
        }
    }
}

/// One-time setup of the tracking session
///
/// Null or empty directory pointers are allowed and fall back to default
/// configuration. Failures are reported through the logging collaborator
/// and leave the process uninitialized; nothing is returned to the host.
#[no_mangle]
pub unsafe extern "C" fn vela_initialize(
    user_config_dir: *const c_char,
    base_config_dir: *const c_char,
    log_level: c_int,
) {
    let level = LogLevel::from_raw(log_level);
    init_logging(level.unwrap_or(LogLevel::Info));
    if level.is_none() {
        tracing::warn!(log_level, "unknown log level, defaulting to info");
    }

    let mut session = SESSION.lock();
    if session.is_some() {
        tracing::warn!("{}; keeping the existing session", VelaError::AlreadyInitialized);
        return;
    }

    let user_dir = dir_from_raw(user_config_dir);
    let base_dir = dir_from_raw(base_config_dir);
    let config = match ClientConfig::load(user_dir.as_deref(), base_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "initialize failed");
            return;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("vela-drain")
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            let err = VelaError::RuntimeError(e.to_string());
            tracing::error!(error = %err, "initialize failed");
            return;
        }
    };

    let sink: Box<dyn TrackingSink> = match config.server_addr {
        Some(addr) => match runtime.block_on(UdpSink::connect(addr)) {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                tracing::error!(error = %e, "initialize failed");
                return;
            }
        },
        None => {
            tracing::info!("no render host configured; tracking runs unconnected");
            Box::new(NullSink)
        }
    };

    let core = ClientCore::start(&config, sink, runtime.handle());
    *session = Some(FfiSession { runtime, core });
}

/// Idempotent-safe teardown
#[no_mangle]
pub extern "C" fn vela_destroy() {
    let taken = SESSION.lock().take();
    match taken {
        Some(FfiSession { runtime, core }) => {
            core.destroy();
            drop(core);
            runtime.shutdown_timeout(Duration::from_millis(250));
        }
        None => tracing::warn!("{}", VelaError::NotInitialized),
    }
}

/// Start or unfreeze tracking submission draining
#[no_mangle]
pub extern "C" fn vela_resume() {
    match SESSION.lock().as_ref() {
        Some(session) => session.core.resume(),
        None => tracing::warn!("{}", VelaError::NotInitialized),
    }
}

/// Suspend outbound tracking sends
#[no_mangle]
pub extern "C" fn vela_pause() {
    match SESSION.lock().as_ref() {
        Some(session) => session.core.pause(),
        None => tracing::warn!("{}", VelaError::NotInitialized),
    }
}

/// Fire-and-forget tracking submission
///
/// Before initialize or after destroy this never crashes and never
/// transmits; the first such call logs a warning, the rest stay silent
/// to keep the sampling loop clean.
#[no_mangle]
pub extern "C" fn vela_send_tracking(tracking: VelaTracking) {
    match SESSION.lock().as_ref() {
        Some(session) => {
            session.core.submit(tracking.into());
        }
        None => SEND_BEFORE_INIT_WARNING.call_once(|| {
            tracing::warn!("{}; dropping tracking samples", VelaError::NotInitialized);
        }),
    }
}

/// Stable protocol identity; valid in every session state
#[no_mangle]
pub extern "C" fn vela_get_protocol_id() -> u64 {
    vela_core::protocol_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VELA_LOG_LEVEL_INFO;
    use serial_test::serial;
    use std::ptr;
    use vela_client::SessionState;

    fn tracking_with_ts(ns: u64) -> VelaTracking {
        VelaTracking {
            target_timestamp_ns: ns,
            ..VelaTracking::default()
        }
    }

    #[test]
    #[serial]
    fn test_lifecycle_round_trip() {
        unsafe { vela_initialize(ptr::null(), ptr::null(), VELA_LOG_LEVEL_INFO) };
        assert!(SESSION.lock().is_some());

        vela_resume();
        vela_send_tracking(tracking_with_ts(1));
        vela_pause();
        vela_destroy();
        assert!(SESSION.lock().is_none());
    }

    #[test]
    #[serial]
    fn test_calls_before_initialize_are_safe_no_ops() {
        vela_send_tracking(tracking_with_ts(1));
        vela_resume();
        vela_pause();
        vela_destroy();
        assert!(SESSION.lock().is_none());
    }

    #[test]
    #[serial]
    fn test_send_after_destroy_never_transmits() {
        unsafe { vela_initialize(ptr::null(), ptr::null(), VELA_LOG_LEVEL_INFO) };
        vela_resume();
        vela_destroy();

        vela_send_tracking(tracking_with_ts(2));
        assert!(SESSION.lock().is_none());
    }

    #[test]
    #[serial]
    fn test_initialize_twice_keeps_first_session() {
        unsafe { vela_initialize(ptr::null(), ptr::null(), VELA_LOG_LEVEL_INFO) };
        vela_resume();
        unsafe { vela_initialize(ptr::null(), ptr::null(), VELA_LOG_LEVEL_INFO) };

        {
            let guard = SESSION.lock();
            let session = guard.as_ref().expect("session survives re-initialize");
            assert_eq!(session.core.state(), SessionState::Active);
        }
        vela_destroy();
    }

    #[test]
    #[serial]
    fn test_destroy_is_idempotent() {
        unsafe { vela_initialize(ptr::null(), ptr::null(), VELA_LOG_LEVEL_INFO) };
        vela_destroy();
        vela_destroy();
        assert!(SESSION.lock().is_none());
    }

    #[test]
    #[serial]
    fn test_protocol_id_is_constant_across_states() {
        let before = vela_get_protocol_id();

        unsafe { vela_initialize(ptr::null(), ptr::null(), VELA_LOG_LEVEL_INFO) };
        let during = vela_get_protocol_id();

        vela_destroy();
        let after = vela_get_protocol_id();

        assert_eq!(before, during);
        assert_eq!(during, after);
        assert_eq!(before, vela_core::protocol_id());
    }
}
