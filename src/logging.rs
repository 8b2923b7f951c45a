//! Simple tracing subscriber setup used by the binary.
//!
//! Logs go to stderr, stdout carries tool results only.

use std::env;

use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

const LOG_FILE_PREFIX: &str = "riot-account-tools.log";

/// Install the global subscriber.
///
/// When logging to a file, the returned guard must be held until exit so
/// buffered lines are flushed.
pub fn init() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(false)
        .with_level(true);

    let Ok(dir) = env::var("LOG_DIR") else {
        builder.with_writer(std::io::stderr).init();
        tracing::debug!("logger initialized");
        return None;
    };

    match init_file_writer(&dir) {
        Ok((file_writer, guard)) => {
            let stderr = std::io::stderr.with_max_level(tracing::Level::INFO);
            builder.with_writer(stderr.and(file_writer)).init();
            tracing::debug!("logger initialized, writing to {}", dir);
            Some(guard)
        }
        Err(e) => {
            builder.with_writer(std::io::stderr).init();
            tracing::warn!("⚠️ unable to log into {}: {}", dir, e);
            None
        }
    }
}

fn init_file_writer(dir: &str) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX);

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = file_builder.build(dir)?;

    Ok(non_blocking(file_appender))
}
