//! CLI subcommands

pub mod config;
pub mod list;
pub mod serve;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use aidash_core::{ConfigSource, Dashboard, FileConfigSource, TesterRegistry, testers::http_client};
use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::{AidashConfig, ConfigLoader};

/// Provider configuration source plus the built-in tester registry
pub struct DashboardParts {
    pub source: Arc<dyn ConfigSource>,
    pub testers: Arc<TesterRegistry>,
}

impl DashboardParts {
    /// Resolve the providers file (flag over config) and build the testers
    pub fn build(config: &AidashConfig, providers: Option<PathBuf>) -> Result<Self> {
        let path = providers
            .or_else(|| ConfigLoader::providers_path(config))
            .context("could not determine providers file; pass --providers")?;

        if !path.exists() {
            warn!("providers file {} does not exist yet", path.display());
        }
        debug!("reading providers from {}", path.display());

        let client = http_client(Duration::from_secs(config.testers.timeout_secs))
            .context("failed to build HTTP client")?;

        Ok(Self {
            source: Arc::new(FileConfigSource::new(path)),
            testers: Arc::new(TesterRegistry::with_builtin_testers(client)),
        })
    }

    pub fn into_dashboard(self) -> Dashboard {
        Dashboard::new(self.source, self.testers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flag_overrides_configured_providers_file() {
        let temp_dir = TempDir::new().unwrap();
        let flag_path = temp_dir.path().join("flag.toml");
        std::fs::write(&flag_path, "[openai]\napikey = \"sk-flag-000000000000\"\n").unwrap();

        let mut config = AidashConfig::default();
        config.providers.file = Some(temp_dir.path().join("configured.toml"));

        let dashboard = DashboardParts::build(&config, Some(flag_path))
            .unwrap()
            .into_dashboard();

        let groups = dashboard.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].services[0].id, "openai");
    }

    #[test]
    fn test_missing_providers_file_lists_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = AidashConfig::default();

        let dashboard = DashboardParts::build(&config, Some(temp_dir.path().join("none.toml")))
            .unwrap()
            .into_dashboard();

        assert!(dashboard.groups().is_empty());
        assert_eq!(dashboard.testers().len(), 11);
    }
}
