use crate::error::AppError;
use std::net::SocketAddr;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must be a valid URL or domain name
/// - HTTP timeout must be at least one second
/// - Bind address must parse as `host:port`
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    base_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    bind_address: &str,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !base_url.contains('.') && !base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "Base URL must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if bind_address.parse::<SocketAddr>().is_err() {
        return Err(AppError::config_error(format!(
            "Bind address '{bind_address}' is not a valid host:port pair"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
