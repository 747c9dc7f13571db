use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::command;
use crate::command::help::HelpArgs;
use crate::logger;

#[derive(Debug, Parser)]
#[command(
    name = "terminus-plugin",
    version,
    about = "Manage Terminus plugins",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Advanced help for plugins
    Help(HelpArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    match cli.command {
        Commands::Help(args) => command::help::run(args),
    }
}
