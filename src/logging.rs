//! Logging setup shared by the binaries

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Install a stderr `fmt` subscriber filtered at `level`.
///
/// Does nothing if a global subscriber is already set.
pub fn init(level: Level) {
    let registry = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(LevelFilter::from_level(level));
    if registry.try_init().is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}
