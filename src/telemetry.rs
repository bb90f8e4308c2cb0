//! Tracing initialization.
//!
//! Diagnostics go to stderr so stdout carries only the example transcript.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops). The filter
/// defaults to `warn` and can be raised with `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::debug!("still fine after double init");
    }
}
