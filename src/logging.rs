//! Logging configuration
//!
//! Log events go to stderr so they never interleave with the menu on
//! stdout. The crate logs at WARN by default; `-v`/`-vv` raise that and
//! `AEROCODE_LOG` (or `RUST_LOG`) overrides it entirely.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "AEROCODE_LOG";

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Map `-q` and the number of `-v` flags to a verbosity
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Build the filter: environment first, then the configured directive,
/// then the verbosity default
fn build_filter(verbosity: Verbosity, directive: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if let Some(filter) = directive.and_then(|d| EnvFilter::try_new(d).ok()) {
        return filter;
    }
    EnvFilter::new(format!("aerocode={}", verbosity.to_level_filter()))
}

/// Initialize the logging system. Call once at startup.
pub fn init_logging(verbosity: Verbosity, directive: Option<&str>) {
    let subscriber = tracing_subscriber::registry()
        .with(build_filter(verbosity, directive))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        );

    // Ignore the error if a subscriber is already set
    let _ = subscriber.try_init();
}
