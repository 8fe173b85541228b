use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::constants::logging;

static HOST_LOGGING: Once = Once::new();

/// Filter from RUST_LOG, or the given default when it is unset or invalid
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the fmt subscriber for the command-line tool
pub fn init_cli(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose {
        logging::VERBOSE_FILTER
    } else {
        logging::DEFAULT_FILTER
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

/// Install the fmt subscriber once when loaded into a host process.
///
/// The host may already own the global subscriber; that is left untouched.
pub fn init_for_host() {
    HOST_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(logging::DEFAULT_FILTER))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_for_host_is_repeatable() {
        init_for_host();
        init_for_host();
    }

    #[test]
    fn test_env_filter_has_directives() {
        let filter = env_filter("debug");
        assert!(!filter.to_string().is_empty());
    }
}
