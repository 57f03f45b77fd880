//! Logging setup for the Packwright CLI.
//!
//! Diagnostics go to stderr through `tracing`, so the composed document on
//! stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use packwright_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Composing build config");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "packwright=debug,packwright_config=debug,packwright_cli=debug";
const QUIET_FILTER: &str = "packwright=error,packwright_config=error,packwright_cli=error";
const DEFAULT_FILTER: &str = "packwright=info,packwright_config=info,packwright_cli=info";

/// Build the filter for the requested verbosity.
///
/// `verbose` wins over `quiet`; with neither, `RUST_LOG` is honored before
/// falling back to info level for the packwright crates.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize the global tracing subscriber with a custom filter.
///
/// ```rust,no_run
/// use packwright_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("packwright_config=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
