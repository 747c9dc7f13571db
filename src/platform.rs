//! Operating system specifics: plugin path layout and the URL launcher.
//!
//! Path conventions are detected once when [`crate::config::Config`] is built;
//! the launcher is resolved once per command.

use std::path::PathBuf;

use crate::error::HelpError;

/// `MSYSTEM` prefix (uppercased, first four chars) reported by MinGW/MSYS shells.
const MINGW_SENTINEL: &str = "MING";

/// Path conventions for the plugin root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformPaths {
    Posix,
    Windows,
}

impl PlatformPaths {
    pub fn detect() -> Self {
        if cfg!(windows) {
            PlatformPaths::Windows
        } else {
            PlatformPaths::Posix
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            PlatformPaths::Posix => "/",
            PlatformPaths::Windows => "\\",
        }
    }

    /// Append the platform separator unless `dir` already ends with it.
    pub fn with_trailing_separator(self, dir: &str) -> String {
        let sep = self.separator();
        if dir.ends_with(sep) {
            dir.to_string()
        } else {
            format!("{dir}{sep}")
        }
    }

    /// Home directory as seen by this platform's environment variables.
    ///
    /// On Windows the POSIX `HOME` is only trusted inside a MinGW shell;
    /// elsewhere `HOMEPATH` is used.
    pub fn home_from_env(self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        let home = match self {
            PlatformPaths::Posix => env("HOME"),
            PlatformPaths::Windows => {
                let system: String = env("MSYSTEM")
                    .map(|s| s.to_uppercase().chars().take(4).collect())
                    .unwrap_or_default();
                if system == MINGW_SENTINEL {
                    env("HOME")
                } else {
                    env("HOMEPATH")
                }
            }
        };
        home.filter(|h| !h.is_empty())
    }

    /// `<home>/terminus/plugins/` with this platform's separators.
    pub fn default_root(self, home: &str) -> String {
        let sep = self.separator();
        let home = home.trim_end_matches(sep);
        format!("{home}{sep}terminus{sep}plugins{sep}")
    }

    /// Directory of a single plugin under `root`. Existence is not checked.
    pub fn join_plugin_path(self, root: &str, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{}", self.with_trailing_separator(root), name))
    }

    /// Version-control metadata directory inside a plugin directory.
    pub fn git_dir(self, plugin_dir: &std::path::Path) -> PathBuf {
        PathBuf::from(format!(
            "{}{}.git",
            plugin_dir.display(),
            self.separator()
        ))
    }
}

/// System command used to open a URL in the default browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    XdgOpen,
    Open,
    Start,
}

impl Launcher {
    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn for_os(os: &str) -> Result<Self, HelpError> {
        match os {
            "linux" => Ok(Launcher::XdgOpen),
            "macos" => Ok(Launcher::Open),
            "windows" => Ok(Launcher::Start),
            other => Err(HelpError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Launcher::XdgOpen => "xdg-open",
            Launcher::Open => "open",
            Launcher::Start => "start",
        }
    }

    /// Program and arguments to spawn. `start` is a cmd builtin, so it goes through `cmd /C`.
    pub fn command(self, url: &str) -> (&'static str, Vec<String>) {
        match self {
            Launcher::XdgOpen | Launcher::Open => (self.name(), vec![url.to_string()]),
            Launcher::Start => (
                "cmd",
                vec![
                    "/C".to_string(),
                    "start".to_string(),
                    String::new(),
                    url.to_string(),
                ],
            ),
        }
    }
}
