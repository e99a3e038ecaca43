//! tracing subscriber setup
//!
//! stdout is reserved for data events, so logs go to stderr or, when a
//! log directory is given, to a daily-rolling file under it.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Filtering follows `RUST_LOG`,
/// defaulting to `info`.
///
/// Returns the appender guard when logging to a file; the caller must
/// hold it for the lifetime of the process or buffered lines are lost.
pub fn init(log_dir: Option<&Path>) -> std::io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "server-versions.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();

            Ok(None)
        }
    }
}
