// ============================================================================
// Logging Setup
// tracing-subscriber initialisation with verbosity-based filtering
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter follows `verbosity`:
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace. Calling this twice is
/// harmless, the second call reports that a subscriber already exists.
pub fn init_logging(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        let first = init_logging(0);
        let second = init_logging(2);
        // at most one global subscriber can be installed per process
        assert!(first.is_err() || second.is_err());
    }
}
