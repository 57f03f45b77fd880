//! Process-boundary inputs for composition.
//!
//! The CLI gathers the override record from layered sources and resolves
//! the project layout, then hands both to `packwright-config`. Nothing below
//! this module reads the process environment.

mod loading;

pub use loading::{DEFAULT_OVERRIDE_FILE, MODE_ENV_VAR, ProjectInputs};
