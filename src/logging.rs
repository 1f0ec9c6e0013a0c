//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Default filter directive for a `-v` count when `RUST_LOG` is not set.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,web2txt=debug",
        _ => "debug,web2txt=trace",
    }
}

/// Initialize diagnostic logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` (the number of `-v`
/// flags) picks the level. Console messages meant for the user do not go
/// through here.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()?;

    tracing::debug!("logging initialized (verbosity {verbosity})");
    Ok(())
}
