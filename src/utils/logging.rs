// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and tests embedding this crate
// ============================================================================

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used, e.g.
/// `"money_format=debug"`. Fails if a global subscriber is already set.
pub fn init_logging(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Another test may have installed the subscriber first
        let _ = init_logging("money_format=trace");
        assert!(init_logging("money_format=trace").is_err());
    }
}
