//! Packwright CLI - compose bundler build configs from the build environment.
//!
//! This crate is the launcher layer around `packwright-config`. It reads the
//! process-boundary inputs (the `NODE_ENV` variable, the `--report` flag and
//! an optional `packwright.json` override file), turns them into the
//! library's override record, and prints the composed engine document.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`config`] - Layered override loading with figment
//! - [`commands`] - `compose` and `check`
//! - [`error`] - Error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages
//!
//! # Example
//!
//! ```rust,no_run
//! use packwright_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, LoadError, Result, ResultExt};
