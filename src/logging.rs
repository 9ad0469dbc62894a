use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::FilterFn;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "postsmith.log";

const DEFAULT_STDERR_FILTER: &str = "info,llm_request=info,web_request=info,hyper=warn,reqwest=warn";
const DEFAULT_FILE_FILTER: &str = "llm_request=debug,info";

/// Daily rolling log file under `log_dir`. Fails instead of panicking when the
/// directory cannot be created or written.
pub fn daily_file_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .with_context(|| format!("Failed to open log directory {}", log_dir.display()))
}

/// Installs the global subscriber: a terminal layer on stderr (so stdout stays clean for
/// generated posts) and a daily rolling file under `log_dir`.
///
/// `RUST_LOG` replaces the terminal filter when set.
pub fn configure_logging(log_dir: &Path) -> Result<()> {
    // Keep connection-pool chatter out of the terminal even at debug
    let custom_filter = FilterFn::new(|metadata| {
        !(metadata.level() == &Level::DEBUG && metadata.target().starts_with("hyper_util"))
    });

    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_STDERR_FILTER));

    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(stderr_filter)
        .with_filter(custom_filter);

    let file_appender = daily_file_appender(log_dir)?;
    let file_log = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(EnvFilter::new(DEFAULT_FILE_FILTER));

    tracing_subscriber::Registry::default()
        .with(stderr_log)
        .with(file_log)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
