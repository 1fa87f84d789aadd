//! Client configuration.

use std::time::Duration;

use strato_core::constants::{DEFAULT_PORT, DEFAULT_TIMEOUT};

/// Configuration for a device client.
///
/// One config addresses one device; discovery (which supplies the host) and
/// any UI for editing these values live outside this crate.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Device hostname or IP address.
    pub host: String,
    /// TCP control port.
    pub port: u16,
    /// Bound applied to connect and to each response read.
    pub timeout: Duration,
    /// Permit commands that match no alias to pass through verbatim.
    pub allow_raw_commands: bool,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            allow_raw_commands: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ClientConfig::new("10.0.0.5");
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, 10000);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.allow_raw_commands);
    }
}
