//! Logging setup for the drover CLI.
//!
//! Structured logging over the `tracing` ecosystem. The `--verbose` flag
//! raises the drover crates to debug level; otherwise `RUST_LOG` wins, with
//! an info-level default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Called once per dispatch, before any command runs. The verbosity level is
/// determined in this order:
///
/// 1. `--verbose` flag: debug level for the drover crates
/// 2. `RUST_LOG` environment variable: custom filter
/// 3. Default: info level for the drover crates
pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("drover=debug,drover_cli=debug,drover_engine=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("drover=info,drover_cli=info,drover_engine=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .compact();

    // The dispatcher may run several times in one process (tests do this);
    // only the first subscriber wins.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_initialization_is_harmless() {
        init_logger(false);
        init_logger(true);
    }

    #[test]
    fn test_verbose_filter_parses() {
        let _filter = EnvFilter::new("drover=debug,drover_cli=debug,drover_engine=debug");
    }
}
