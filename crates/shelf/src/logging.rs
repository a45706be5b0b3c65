//! Logging setup.
//!
//! Logs go to stderr so `--json` output on stdout stays machine readable.
//! `RUST_LOG` wins over the configured level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(level: &str, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { level };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
