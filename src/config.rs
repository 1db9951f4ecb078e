//! Client configuration parameters
//!
//! All tunable parameters for talking to the mbtool daemon.
//! Values come from defaults, an optional JSON file, and CLI overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rpc::codec::DEFAULT_MAX_MESSAGE_SIZE;

/// Default daemon socket (abstract namespace).
pub const DEFAULT_SOCKET_ADDRESS: &str = "@mbtool.daemon";

/// Hard ceiling for `max_message_size`; the length prefix is an `i32`.
pub const MAX_MESSAGE_SIZE_LIMIT: usize = i32::MAX as usize;

/// Core client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    // --- Connection ---
    /// `@name` for an abstract socket, otherwise a filesystem path
    pub socket_address: String,
    /// Socket read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,
    /// Socket write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,

    // --- Protocol ---
    /// Largest response payload accepted (bytes)
    pub max_message_size: usize,
    /// Refuse daemons reporting an older version than this
    pub min_daemon_version: Option<String>,

    // --- Boot partition ---
    /// Boot block device candidates, first existing one wins
    pub boot_blockdev_candidates: Vec<String>,
    /// Directories the daemon searches for by-name block devices
    pub blockdev_search_dirs: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Connection
            socket_address: DEFAULT_SOCKET_ADDRESS.to_owned(),
            read_timeout_ms: 0,
            write_timeout_ms: 0,

            // Protocol
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            min_daemon_version: None,

            // Boot partition
            boot_blockdev_candidates: vec![
                "/dev/block/bootdevice/by-name/boot".to_owned(),
                "/dev/block/platform/msm_sdcc.1/by-name/boot".to_owned(),
                "/dev/block/by-name/boot".to_owned(),
            ],
            blockdev_search_dirs: vec![
                "/dev/block/bootdevice/by-name".to_owned(),
                "/dev/block/platform".to_owned(),
                "/dev/block".to_owned(),
            ],
        }
    }
}

impl ClientConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.socket_address.is_empty() || self.socket_address == "@" {
            return Err(ConfigError::Invalid("socket_address is empty".into()));
        }
        if self.max_message_size == 0 {
            return Err(ConfigError::Invalid("max_message_size must be non-zero".into()));
        }
        if self.max_message_size > MAX_MESSAGE_SIZE_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_message_size {} exceeds {MAX_MESSAGE_SIZE_LIMIT}",
                self.max_message_size
            )));
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        millis(self.write_timeout_ms)
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn default_config_is_sane() {
        let c = ClientConfig::default();
        assert!(c.validate().is_ok());
        assert!(c.socket_address.starts_with('@'));
        assert_eq!(c.max_message_size, 32 * 1024 * 1024);
        assert!(c.read_timeout().is_none());
        assert!(!c.boot_blockdev_candidates.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let c = ClientConfig {
            min_daemon_version: Some("9.3.0".into()),
            read_timeout_ms: 1500,
            ..ClientConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let c2: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, c2);
        assert_eq!(c2.read_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let c: ClientConfig = serde_json::from_str(r#"{"socket_address":"/tmp/mb.sock"}"#).unwrap();
        assert_eq!(c.socket_address, "/tmp/mb.sock");
        assert_eq!(c.max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
    }

    #[test]
    fn validation_rejects_bad_limits() {
        let zero = ClientConfig {
            max_message_size: 0,
            ..ClientConfig::default()
        };
        assert!(zero.validate().is_err());

        let empty = ClientConfig {
            socket_address: "@".into(),
            ..ClientConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"write_timeout_ms": 250, "blockdev_search_dirs": []}}"#).unwrap();
        let c = ClientConfig::load(file.path()).unwrap();
        assert_eq!(c.write_timeout(), Some(Duration::from_millis(250)));
        assert!(c.blockdev_search_dirs.is_empty());

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();
        assert!(matches!(
            ClientConfig::load(bad.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
