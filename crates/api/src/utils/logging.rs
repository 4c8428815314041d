//! Logging setup and command execution logging

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for a UI shell or test binary
///
/// Respects `RUST_LOG`; safe to call more than once (later calls are
/// no-ops).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// Log the outcome of a command execution
pub(crate) fn log_command_execution(command: &'static str, elapsed: Duration, success: bool) {
    let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, elapsed_ms, "command completed");
    } else {
        warn!(command, elapsed_ms, "command rejected");
    }
}
