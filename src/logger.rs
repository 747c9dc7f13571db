use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Overrides the `-v` derived filter, using `EnvFilter` directive syntax.
pub const LOG_ENV: &str = "TERMINUS_LOG";

fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,terminus_plugin={level}")
}

/// Install the stderr tracing subscriber.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
