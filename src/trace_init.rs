//! Optional JSON trace output, enabled by the `trace` feature.

/// File created in the log directory.
pub const TRACE_FILE: &str = "hebrew-cal-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "hebrew_cal=debug";

/// Install a JSON subscriber writing [`TRACE_FILE`] into `log_dir`.
///
/// Returns `false` when the crate was built without the `trace` feature or a
/// global subscriber is already set.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &std::path::Path) -> bool {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(false)
        // one event per `map` call, carrying its length and dotted flag
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .is_ok();
    if installed {
        // the writer thread must outlive every traced call
        std::mem::forget(guard);
    }
    installed
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> bool {
    false
}
