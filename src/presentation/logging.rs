//! Logging setup
//!
//! `TREECASCADE_LOG` takes an `EnvFilter` directive and wins over everything
//! else. Otherwise `-v` flags raise the configured verbosity.

use tracing_subscriber::EnvFilter;

use treecascade::Verbosity;

pub const LOG_ENV: &str = "TREECASCADE_LOG";

/// Filter directive for a `-v` count on top of the configured verbosity
pub fn directive(verbose: u8, configured: Verbosity) -> &'static str {
    match verbose {
        0 => configured.filter_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber; a second call is a no-op
pub fn init(verbose: u8, configured: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose, configured)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
