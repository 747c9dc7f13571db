use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str =
    "Usage: terminus plugin help plugin-name-1 [plugin-name-2] ... [--browse | --print]";

/// Errors that abort the whole `help` command.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("{0}")]
    Usage(String),

    #[error("Operating system not supported: {0}")]
    UnsupportedPlatform(String),

    #[error("Unable to access plugin directory '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures scoped to a single requested plugin. The display text is the
/// message reported to the user; processing continues with the next plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Unable to locate {plugin} plugin.")]
    PluginNotFound { plugin: String },

    /// `readme` is whatever URL could be derived, possibly empty.
    #[error("Unable to locate {readme}.")]
    RemoteNotFound { readme: String },

    #[error("Unable to locate {url}.")]
    UnreachableReadme { url: String },

    #[error("Unable to display {url}.")]
    Render {
        url: String,
        #[source]
        source: RenderError,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("request failed: {0}")]
    Fetch(String),

    #[error("response had no body")]
    EmptyBody,

    #[error("no README article found in page")]
    Parse,
}
