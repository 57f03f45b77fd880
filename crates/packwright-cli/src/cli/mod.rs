//! Command-line interface definition for Packwright.
//!
//! # Command Structure
//!
//! - `packwright compose` - Print or write the composed engine config
//! - `packwright check` - Compose and validate without writing anything

mod commands;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ComposeArgs, EnvArgs};
pub use validation::parse_export_name;

/// Packwright - build config composer for a module bundler
#[derive(Parser, Debug)]
#[command(
    name = "packwright",
    version,
    about = "Compose bundler build configs from the build environment",
    long_about = "Packwright turns a build mode and an optional analysis flag into a complete\n\
                  bundler configuration: lint and transform rules, environment-gated plugins,\n\
                  resolution aliases and a UMD output layout."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
