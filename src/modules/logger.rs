use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Resolve the log directory from `LOG_DIR`, creating it if needed.
/// Returns `None` when file logging is not configured.
pub fn get_log_dir() -> Result<Option<PathBuf>, String> {
    let Some(dir) = std::env::var_os("LOG_DIR").map(PathBuf::from) else {
        return Ok(None);
    };

    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create log directory: {}", e))?;
    }

    Ok(Some(dir))
}

/// Initialize logger system
pub fn init_logger() {
    // Capture log macro logs
    let _ = tracing_log::LogTracer::init();

    let console_layer = fmt::Layer::new()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    // Daily rolling file output, only when LOG_DIR is set
    let file_layer = match get_log_dir() {
        Ok(Some(dir)) => {
            let file_appender = tracing_appender::rolling::daily(dir, "proxy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            // Guard must outlive the process for the writer to keep flushing
            std::mem::forget(guard);
            Some(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .boxed(),
            )
        }
        Ok(None) => None,
        Err(e) => {
            eprintln!("Failed to initialize log directory: {}", e);
            None
        }
    };

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so a second call (tests) does not panic
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    info!("Logger system initialized");
}
