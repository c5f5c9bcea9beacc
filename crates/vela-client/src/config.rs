//! Client configuration
//!
//! Configuration is optional: hosts may pass no directories at all, and
//! a missing file falls back to defaults. A config file that exists but
//! cannot be read or parsed is a resource error; initialize reports it
//! and the session stays down.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use vela_core::{VelaError, VelaResult};
use vela_tracking::DEFAULT_QUEUE_CAPACITY;

/// Config file name inside either config directory
pub const CONFIG_FILE_NAME: &str = "client.json";

/// Tracking client configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Render host tracking endpoint; when unset the session runs
    /// unconnected and drained samples are dropped
    pub server_addr: Option<SocketAddr>,
    /// Sample buffer capacity
    pub queue_capacity: usize,
    /// Backoff before retrying a stalled transport, in milliseconds
    pub send_backoff_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_addr: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            send_backoff_ms: 2,
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from the boundary directories
    ///
    /// The user directory wins over the base directory; defaults apply
    /// when neither holds a config file.
    pub fn load(
        user_config_dir: Option<&Path>,
        base_config_dir: Option<&Path>,
    ) -> VelaResult<Self> {
        for dir in [user_config_dir, base_config_dir].into_iter().flatten() {
            let path = dir.join(CONFIG_FILE_NAME);
            match std::fs::read_to_string(&path) {
                Ok(contents) => {
                    return serde_json::from_str(&contents).map_err(|e| {
                        VelaError::InvalidConfig(format!("{}: {}", path.display(), e))
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(VelaError::InvalidConfig(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        }
        Ok(ClientConfig::default())
    }

    #[inline]
    pub fn send_backoff(&self) -> Duration {
        Duration::from_millis(self.send_backoff_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vela-config-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_directories() {
        let config = ClientConfig::load(None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = scratch_dir("missing");
        let config = ClientConfig::load(Some(dir.as_path()), None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_user_dir_wins_over_base_dir() {
        let user = scratch_dir("user");
        let base = scratch_dir("base");
        fs::write(
            user.join(CONFIG_FILE_NAME),
            r#"{"queue_capacity": 16}"#,
        )
        .unwrap();
        fs::write(
            base.join(CONFIG_FILE_NAME),
            r#"{"queue_capacity": 4}"#,
        )
        .unwrap();

        let config = ClientConfig::load(Some(user.as_path()), Some(base.as_path())).unwrap();
        assert_eq!(config.queue_capacity, 16);
        // Unset fields keep their defaults.
        assert_eq!(config.send_backoff_ms, ClientConfig::default().send_backoff_ms);
    }

    #[test]
    fn test_base_dir_applies_when_user_dir_is_empty() {
        let user = scratch_dir("user-empty");
        let base = scratch_dir("base-only");
        fs::write(
            base.join(CONFIG_FILE_NAME),
            r#"{"server_addr": "192.168.1.10:9944"}"#,
        )
        .unwrap();

        let config = ClientConfig::load(Some(user.as_path()), Some(base.as_path())).unwrap();
        assert_eq!(config.server_addr, Some("192.168.1.10:9944".parse().unwrap()));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = scratch_dir("invalid");
        fs::write(dir.join(CONFIG_FILE_NAME), "not json").unwrap();

        let err = ClientConfig::load(Some(dir.as_path()), None).unwrap_err();
        assert!(matches!(err, VelaError::InvalidConfig(_)));
    }
}
