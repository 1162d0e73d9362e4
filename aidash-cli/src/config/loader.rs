use super::types::{
    AidashConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TESTER_TIMEOUT_SECS, ProvidersConfig,
    RawAidashConfig, RawServerConfig, RawTestersConfig, ServerConfig, TestersConfig,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<AidashConfig> {
        Self::load_layers(
            Self::user_config_path().as_deref(),
            &Self::project_config_path(),
        )
    }

    /// Load and merge the given layers, later layers winning per field
    fn load_layers(user_path: Option<&Path>, project_path: &Path) -> Result<AidashConfig> {
        let mut raw = RawAidashConfig::default();

        // Layer 1: User config
        if let Some(user_path) = user_path
            && user_path.exists()
        {
            raw = Self::merge_raw(raw, Self::read_raw(user_path)?);
        }

        // Layer 2: Project config
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(project_path)?);
        }

        Ok(Self::finalize(raw))
    }

    fn read_raw(path: &Path) -> Result<RawAidashConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Get user config directory (platform-specific)
    pub fn user_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "aidash").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        Self::user_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with AIDASH_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("AIDASH_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".aidash/config.toml")
        }
    }

    /// Providers file used when none is configured
    pub fn default_providers_path() -> Option<PathBuf> {
        Self::user_config_dir().map(|dir| dir.join("providers.toml"))
    }

    /// Resolve the providers file, falling back to the user config directory
    pub fn providers_path(config: &AidashConfig) -> Option<PathBuf> {
        config
            .providers
            .file
            .clone()
            .or_else(Self::default_providers_path)
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawAidashConfig, overlay: RawAidashConfig) -> RawAidashConfig {
        RawAidashConfig {
            server: RawServerConfig {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            providers: ProvidersConfig {
                file: overlay.providers.file.or(base.providers.file),
            },
            testers: RawTestersConfig {
                timeout_secs: overlay.testers.timeout_secs.or(base.testers.timeout_secs),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawAidashConfig) -> AidashConfig {
        AidashConfig {
            server: ServerConfig {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            providers: raw.providers,
            testers: TestersConfig {
                timeout_secs: raw.testers.timeout_secs.unwrap_or(DEFAULT_TESTER_TIMEOUT_SECS),
            },
        }
    }
}
