mod cli;
mod cmd;
mod command;
mod config;
mod error;
mod http;
mod logger;
mod output;
mod platform;
mod plugin;
mod readme;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
