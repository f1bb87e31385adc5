//! CLI interface for maz-feed
//!
//! Provides subcommands for:
//! - `run`: Start the composition service and print the arranged feed
//! - `compose`: Run a single composition cycle and print it as JSON
//! - `config`: Show the effective configuration

mod compose;
mod run;

pub use compose::ComposeArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "maz-feed")]
#[command(about = "Feed composition service for the MAZDADY P2P marketplace")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the recurring composition service
    Run(RunArgs),
    /// Run one composition cycle and print the feed as JSON
    Compose(ComposeArgs),
    /// Show the effective configuration
    Config,
}
