/// Logging setup using tracing
///
/// Log level is controlled by the `WAIFU_VIEWER_LOG` environment variable:
/// ```bash
/// WAIFU_VIEWER_LOG=debug cargo run
/// ```
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_ENV: &str = "WAIFU_VIEWER_LOG";
const DEFAULT_FILTER: &str = "waifu_viewer=info,warn";

/// Initialize the global subscriber, writing to stderr
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("🎲 Waifu Viewer v{} starting", env!("CARGO_PKG_VERSION"));

    Ok(())
}
