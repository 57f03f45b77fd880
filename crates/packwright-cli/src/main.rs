//! Packwright CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches the command.

use clap::Parser;
use miette::Result;
use packwright_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);
    logger::init_logger(args.verbose, args.quiet, !ui::colors_enabled());

    let result = match args.command {
        cli::Command::Compose(compose_args) => commands::compose_execute(compose_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
