//! Log output
//!
//! The terminal belongs to the UI, so events go to a file instead of stderr.
//! Verbosity follows `RUST_LOG` and defaults to `info`.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// `<data dir>/tutortty/tutortty.log`
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("tutortty").join("tutortty.log"))
}

/// Install the file subscriber. The returned guard flushes buffered lines
/// when dropped, so keep it alive until the program exits.
///
/// Only the first call has any effect.
pub fn init(log_file: &Path) -> std::io::Result<Option<WorkerGuard>> {
    static INIT: Once = Once::new();

    let dir = log_file.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "tutortty.log".into());

    let mut guard = None;
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true);
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        if tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            guard = Some(worker_guard);
        }
    });
    Ok(guard)
}
