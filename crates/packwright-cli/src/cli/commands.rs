use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_export_name;

/// Available Packwright subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the build config and print it as engine JSON
    ///
    /// The mode comes from --mode, then NODE_ENV, then packwright.json.
    /// Anything other than "production" composes a development config.
    Compose(ComposeArgs),

    /// Compose and validate the build config
    ///
    /// Checks rule ordering, alias targets, extensions and plugin
    /// activation, then prints a one-line summary.
    Check(CheckArgs),
}

/// Inputs that select the build environment and project layout
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Build mode (overrides NODE_ENV and the override file)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Emit a bundle analysis report
    #[arg(long)]
    pub report: bool,

    /// Override file (default: packwright.json in the project root, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Global symbol the UMD artifact exports
    #[arg(long, value_name = "NAME", value_parser = parse_export_name)]
    pub library: Option<String>,
}

/// Arguments for the compose command
#[derive(Args, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub env: EnvArgs,
}
