//! Default [`tracing`] initialisers, mirroring the teacher's `core::logging` module:
//! human-readable output for local runs, JSON output for log aggregators. Neither is called
//! automatically — callers opt in from their own `main`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialises human-readable logging, honouring `RUST_LOG` (default level `INFO`).
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer())
        .init()
}

/// Initialises JSON logging, honouring `RUST_LOG` (default level `INFO`).
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
        .init()
}
