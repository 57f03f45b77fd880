//! Command implementations for the Packwright CLI.
//!
//! - [`compose`] - Print or write the engine document
//! - [`check`] - Compose and validate, then print a summary
//!
//! Each command exposes an `execute` function taking its parsed arguments.

pub mod check;
pub mod compose;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
