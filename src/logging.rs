use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for interactive mode.
pub const LOG_ENV_VAR: &str = "DOGVIEW_LOG";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// File only, and only when `DOGVIEW_LOG` is set. Keeps the TUI clean.
    File,
    /// Standard error, for headless runs.
    Stderr,
}

/// Initialize tracing for the given target.
///
/// `RUST_LOG` overrides the default filter (`info` for files, `warn`
/// for stderr). File names get a `.{timestamp}.{pid}` suffix so
/// concurrent instances don't clobber each other.
pub fn init_tracing(target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
        LogTarget::File => {
            let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
                return;
            };

            let pid = std::process::id();
            let timestamp = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

            let Ok(file) = std::fs::File::create(&unique_path) else {
                eprintln!("Warning: Failed to create log file: {}", unique_path);
                return;
            };

            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
    }
}
