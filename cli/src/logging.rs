use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "kitreg=info,kitreg_core=info,tower_http=info";
const VERBOSE_FILTER: &str = "kitreg=debug,kitreg_core=debug,tower_http=debug";

/// Initialize logging for the kitreg server
///
/// Logs are written to:
/// - XDG_DATA_HOME/kitreg/logs/ on Unix (typically ~/.local/share/kitreg/logs/)
/// - ~/Library/Application Support/kitreg/logs/ on macOS
/// - {FOLDERID_LocalAppData}/kitreg/logs/ on Windows
///
/// Log files are rotated daily with the pattern: kitreg.log.YYYY-MM-DD
///
/// RUST_LOG takes precedence over the built-in filter; `verbose` switches the
/// built-in filter to debug.
pub fn init(verbose: bool) -> Result<()> {
    let log_dir = get_log_dir()?;

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "kitreg.log");

    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI colors in log files
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!("Logging initialized to {}", log_dir.display());

    Ok(())
}

/// Get the log directory path using XDG conventions
fn get_log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Failed to determine data directory (XDG_DATA_HOME or platform equivalent)")?;

    Ok(data_dir.join("kitreg").join("logs"))
}
