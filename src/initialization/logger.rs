//! Logger initialization.

use std::io::Write;

use colored::*;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the global logger with the given level and format.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate and as
/// the default. Plain output colors the level; JSON output writes one object
/// per line with a millisecond timestamp.
///
/// ```bash
/// RUST_LOG=debug url_inspector analyze https://example.com
/// url_inspector --log-format json --log-level trace watch
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("url_inspector", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let label = level.to_string();
                let label = match level {
                    log::Level::Error => label.red().bold(),
                    log::Level::Warn => label.yellow(),
                    log::Level::Info => label.green(),
                    log::Level::Debug => label.blue(),
                    log::Level::Trace => label.purple(),
                };
                writeln!(
                    buf,
                    "{} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    label,
                    record.args()
                )
            });
        }
    }

    // Logs go to stderr so reports on stdout stay machine-readable.
    builder.target(env_logger::Target::Stderr);
    builder.try_init()?;
    Ok(())
}
