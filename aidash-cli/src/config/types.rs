use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAidashConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub testers: RawTestersConfig,
}

/// Server config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    /// Host for the dashboard server
    pub host: Option<String>,

    /// Port for the dashboard server
    pub port: Option<u16>,
}

/// Tester config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTestersConfig {
    /// Per-request timeout of the built-in HTTP testers
    pub timeout_secs: Option<u64>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AidashConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub testers: TestersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host for the dashboard server
    pub host: String,

    /// Port for the dashboard server
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    /// Provider configuration file (TOML or JSON)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestersConfig {
    /// Per-request timeout of the built-in HTTP testers
    pub timeout_secs: u64,
}

impl Default for TestersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TESTER_TIMEOUT_SECS,
        }
    }
}

/// Default host for the dashboard server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the dashboard server
pub const DEFAULT_PORT: u16 = 7744;

/// Default per-request timeout of the built-in HTTP testers
pub const DEFAULT_TESTER_TIMEOUT_SECS: u64 = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AidashConfig::default();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.providers.file.is_none());
        assert_eq!(config.testers.timeout_secs, 15);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AidashConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            providers: ProvidersConfig {
                file: Some(PathBuf::from("/etc/aidash/providers.toml")),
            },
            testers: TestersConfig { timeout_secs: 5 },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AidashConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(
            parsed.providers.file,
            Some(PathBuf::from("/etc/aidash/providers.toml"))
        );
        assert_eq!(parsed.testers.timeout_secs, 5);
    }

    #[test]
    fn test_raw_config_partial_parsing() {
        let toml_str = r#"
[server]
port = 9000
"#;
        let raw: RawAidashConfig = toml::from_str(toml_str).unwrap();

        // Only port was set, host should be None
        assert_eq!(raw.server.port, Some(9000));
        assert!(raw.server.host.is_none());
        assert!(raw.providers.file.is_none());
        assert!(raw.testers.timeout_secs.is_none());
    }

    #[test]
    fn test_raw_config_empty_uses_none() {
        let raw: RawAidashConfig = toml::from_str("").unwrap();

        assert!(raw.server.host.is_none());
        assert!(raw.server.port.is_none());
    }
}
