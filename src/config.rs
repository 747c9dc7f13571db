use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::platform::PlatformPaths;
use crate::plugin::paths::{self, PLUGINS_DIR_ENV};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Optional on-disk settings, read from `<config dir>/terminus/plugin-help.yaml`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    /// Plugin root used when `TERMINUS_PLUGINS_DIR` is not set.
    #[serde(default)]
    pub plugins_dir: Option<String>,

    /// Timeout for README reachability and fetch requests.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|h| h.join(".config")))?;
        Some(base.join("terminus").join("plugin-help.yaml"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Immutable settings shared by every step of the `help` command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Plugin root, always ending with the platform separator.
    pub plugins_root: String,
    pub platform: PlatformPaths,
    /// OS name used to pick the browser launcher.
    pub os: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Build the configuration from the environment and the optional config file.
    ///
    /// Does not touch the plugin root; it is created by the command once the
    /// arguments have been validated.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path.map(Path::to_path_buf).or_else(FileConfig::default_path) {
            Some(path) => FileConfig::load_from(&path)?,
            None => FileConfig::default(),
        };

        let config = Self::from_sources(
            file,
            PlatformPaths::detect(),
            std::env::consts::OS,
            |key| std::env::var(key).ok(),
        )?;

        debug!(
            plugins_root = %config.plugins_root,
            platform = ?config.platform,
            os = %config.os,
            timeout_secs = config.request_timeout.as_secs(),
            "config:loaded"
        );

        Ok(config)
    }

    /// Merge the config file with environment lookups from `env`.
    ///
    /// Plugin root precedence: `TERMINUS_PLUGINS_DIR`, then the file's
    /// `plugins_dir`, then the platform default under the home directory.
    pub fn from_sources(
        file: FileConfig,
        platform: PlatformPaths,
        os: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let override_dir = env(PLUGINS_DIR_ENV)
            .filter(|d| !d.is_empty())
            .or(file.plugins_dir);

        let plugins_root = paths::resolve_plugin_root(platform, override_dir.as_deref(), &env)
            .context("Could not determine home directory")?;

        Ok(Self {
            plugins_root,
            platform,
            os: os.to_string(),
            request_timeout: Duration::from_secs(
                file.request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }
}
