//! Log output setup for the command line tool.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "yellowbridge=debug"
    } else {
        "yellowbridge=warn"
    }
}

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over the `debug` switch.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "yellowbridge=debug");
        assert_eq!(default_filter(false), "yellowbridge=warn");
    }
}
