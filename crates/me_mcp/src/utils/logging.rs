use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{MeServerError, MeServerResult};

/// Initialize logging based on environment configuration.
///
/// Logging is opt-in via `RUST_LOG` and always writes to stderr: stdout
/// carries the MCP protocol stream and must stay clean.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
pub fn init_logging() -> MeServerResult<()> {
    // Check if RUST_LOG is set, skip logging if not
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter);

    subscriber
        .try_init()
        .map_err(|e| MeServerError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_logging_setup() {
        // Without RUST_LOG set this is a no-op and must succeed
        let result = init_logging();
        assert!(result.is_ok());
    }
}
