//! Logging setup for the CLI.
//!
//! Installs a global tracing subscriber writing to stderr, so stdout stays
//! reserved for the report. `RUST_LOG` takes precedence over the level picked
//! from the command line.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset and `--verbose` is not given
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "deps_analyze=debug";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing on stderr.
///
/// Failures are returned so callers can continue without logs.
pub fn init(verbose: bool, ansi: bool) -> Result<(), LoggingError> {
    let subscriber = fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter_does_not_panic() {
        let _ = build_env_filter(false);
        let _ = build_env_filter(true);
    }

    #[test]
    fn test_init_twice_reports_error() {
        let first = init(false, false);
        let second = init(false, false);
        // Another test may already have installed a subscriber.
        assert!(first.is_err() || second.is_err());
    }
}
