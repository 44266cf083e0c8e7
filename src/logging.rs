//! Diagnostic logging
//!
//! Logs go to stderr and are filtered by `RUST_LOG`; without it only warnings
//! are shown, or debug output with `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default = if verbose {
        "cps_bundler=debug"
    } else {
        "cps_bundler=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
