//! Plugin root discovery and per-plugin directory lookup.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::HelpError;
use crate::platform::PlatformPaths;

/// Environment variable overriding the plugin root.
pub const PLUGINS_DIR_ENV: &str = "TERMINUS_PLUGINS_DIR";

/// Compute the plugin root with a trailing separator.
///
/// An explicit `override_dir` wins; otherwise the root lives under the home
/// directory reported by `env`, falling back to the `home` crate when the
/// platform's home variable is unset. Returns `None` if no home can be found.
pub fn resolve_plugin_root(
    platform: PlatformPaths,
    override_dir: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Some(platform.with_trailing_separator(dir));
    }

    let home = platform
        .home_from_env(&env)
        .or_else(|| home::home_dir().map(|h| h.display().to_string()))?;

    Some(platform.default_root(&home))
}

/// Create the plugin root (and parents) if it does not exist yet.
pub fn ensure_plugin_root(root: &str) -> Result<PathBuf, HelpError> {
    let path = PathBuf::from(root);
    if path.is_dir() {
        return Ok(path);
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(&path).map_err(|source| HelpError::Io {
        path: path.clone(),
        source,
    })?;

    debug!(root = %path.display(), "paths:created plugin root");
    Ok(path)
}

/// Names of the installed plugins (immediate, non-hidden children of the root), sorted.
pub fn list_plugins(root: &str) -> Result<Vec<String>, HelpError> {
    let io_err = |source: std::io::Error| HelpError::Io {
        path: PathBuf::from(root),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// A requested plugin's location on disk.
#[derive(Debug, Clone)]
pub struct PluginDirectory {
    pub root: String,
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
    pub has_vcs_metadata: bool,
}

impl PluginDirectory {
    pub fn resolve(platform: PlatformPaths, root: &str, name: &str) -> Self {
        let path = platform.join_plugin_path(root, name);
        let exists = path.is_dir();
        let has_vcs_metadata = exists && platform.git_dir(&path).is_dir();
        Self {
            root: root.to_string(),
            name: name.to_string(),
            path,
            exists,
            has_vcs_metadata,
        }
    }

    /// Both the directory and its `.git` subdirectory are present.
    pub fn is_valid(&self) -> bool {
        self.exists && self.has_vcs_metadata
    }
}
