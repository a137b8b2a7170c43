use std::io::stderr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber, filtered by `RUST_LOG` and `info` by default.
///
/// The returned guard must be kept alive to flush the buffered output.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let format_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (stderr, stderr_guard) = tracing_appender::non_blocking(stderr());
    let subscriber_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .without_time()
        .with_filter(format_filter);
    tracing_subscriber::registry().with(subscriber_layer).try_init()?;
    Ok(stderr_guard)
}
