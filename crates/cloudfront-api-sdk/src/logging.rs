//! Tracing setup shared by the handler runtimes

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Output goes to stderr; stdout is reserved for the IPC channel. The filter
/// comes from `RUST_LOG` and defaults to `info`. Calling this more than once
/// is harmless.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();
}
