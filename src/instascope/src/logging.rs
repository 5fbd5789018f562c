use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

/// Installs the global subscriber.
///
/// Logs go to stderr so stdout only carries the report, or to
/// `config.log_file` when one is set. `RUST_LOG` takes precedence over
/// `config.log_level`.
pub fn setup_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log_level '{}'", config.log_level))?,
    };

    match &config.log_file {
        Some(log_file) => {
            let file_appender = file_appender(log_file)?;
            let file_layer = fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_timer(SystemTime)
                .with_writer(file_appender);

            let subscriber = tracing_subscriber::registry().with(filter).with(file_layer);
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to set tracing subscriber")?;
            tracing::info!("Logging system initialized. Writing to {}", log_file.display());
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);

            let subscriber = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer);
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to set tracing subscriber")?;
        }
    }

    Ok(())
}

fn file_appender(log_file: &Path) -> Result<RollingFileAppender> {
    let file_name = log_file
        .file_name()
        .with_context(|| format!("log_file '{}' has no file name", log_file.display()))?;
    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(directory)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_appender_requires_file_name() {
        assert!(file_appender(Path::new("/")).is_err());
    }

    #[test]
    fn test_file_appender_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("instascope.log");
        assert!(file_appender(&log_file).is_ok());
        assert!(log_file.exists());
    }
}
