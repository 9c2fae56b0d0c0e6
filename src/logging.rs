use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log directive applied on top of `RUST_LOG`.
fn default_directive(debug: bool) -> &'static str {
    if debug {
        "prop_scout=debug"
    } else {
        "prop_scout=info"
    }
}

fn env_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let directive = default_directive(debug)
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Resolves the log directory and file name.
///
/// The `--log-file` argument wins over the configured path, which wins over
/// the default location under the config directory.
pub fn resolve_log_location(
    cli_path: Option<&String>,
    config_path: Option<&String>,
) -> (String, String) {
    match cli_path.or(config_path) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging configuration for the application.
///
/// - `--quiet`: logs only to file
/// - otherwise: logs to both stdout and file
/// - `--debug` raises the crate's level to debug
///
/// Creates the log directory if needed and uses a daily rolling file appender.
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Try to load config to get log file path if specified
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let (log_dir, log_file_name) =
        resolve_log_location(args.log_file.as_ref(), config_log_path.as_ref());

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    build_subscriber(non_blocking, args.quiet, args.debug)?.init();

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

/// File layer always, stdout layer unless `quiet`.
fn build_subscriber<W>(
    file_writer: W,
    quiet: bool,
    debug: bool,
) -> Result<impl Subscriber + Send + Sync + 'static, AppError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let file_layer = fmt::Layer::new()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(env_filter(debug)?);

    let stdout_layer = if quiet {
        None
    } else {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(env_filter(debug)?),
        )
    };

    Ok(tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer))
}
