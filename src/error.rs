use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Player name input
    #[error("Invalid player name '{name}': expected at least a first and a last name")]
    InvalidName { name: String },

    #[error("Invalid player identifier '{id}'")]
    InvalidPlayerId { id: String },

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("Upstream server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Upstream client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Upstream rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("Upstream service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Page structure errors
    #[error("No game log table on page: {url}")]
    NoGameLogTable { url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create an invalid player name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create an invalid player identifier error
    pub fn invalid_player_id(id: impl Into<String>) -> Self {
        Self::InvalidPlayerId { id: id.into() }
    }

    /// Create a page not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an upstream server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an upstream client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an upstream rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an upstream service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a missing game log table error
    pub fn no_game_log_table(url: impl Into<String>) -> Self {
        Self::NoGameLogTable { url: url.into() }
    }

    /// Check if the upstream site could not be reached or refused to serve the page
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::ApiRateLimit { .. }
        )
    }

    /// Check if error indicates data not found (absence, not a technical failure)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. } | AppError::NoGameLogTable { .. }
        )
    }

    /// Check if the error was caused by caller input rather than the system
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AppError::InvalidName { .. } | AppError::InvalidPlayerId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_helper() {
        let error = AppError::invalid_name("Giannis");
        assert!(matches!(error, AppError::InvalidName { .. }));
        assert_eq!(
            error.to_string(),
            "Invalid player name 'Giannis': expected at least a first and a last name"
        );
        assert!(error.is_invalid_input());
        assert!(!error.is_not_found());
        assert!(!error.is_upstream_unavailable());
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://example.com/players/j/jamesle01/gamelog/2025");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "Page not found (404): https://example.com/players/j/jamesle01/gamelog/2025"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal Server Error", "https://example.com");
        assert_eq!(
            error.to_string(),
            "Upstream server error (500): Internal Server Error (URL: https://example.com)"
        );
    }

    #[test]
    fn test_no_game_log_table_helper() {
        let error = AppError::no_game_log_table("https://example.com/page");
        assert_eq!(
            error.to_string(),
            "No game log table on page: https://example.com/page"
        );
    }

    #[test]
    fn test_is_upstream_unavailable() {
        assert!(AppError::network_timeout("url").is_upstream_unavailable());
        assert!(AppError::network_connection("url", "refused").is_upstream_unavailable());
        assert!(AppError::api_server_error(500, "message", "url").is_upstream_unavailable());
        assert!(AppError::api_client_error(403, "message", "url").is_upstream_unavailable());
        assert!(AppError::api_rate_limit("message", "url").is_upstream_unavailable());
        assert!(AppError::api_service_unavailable(503, "message", "url").is_upstream_unavailable());

        assert!(!AppError::api_not_found("url").is_upstream_unavailable());
        assert!(!AppError::no_game_log_table("url").is_upstream_unavailable());
        assert!(!AppError::config_error("message").is_upstream_unavailable());
    }

    #[test]
    fn test_is_not_found() {
        assert!(AppError::api_not_found("url").is_not_found());
        assert!(AppError::no_game_log_table("url").is_not_found());

        assert!(!AppError::api_server_error(500, "message", "url").is_not_found());
        assert!(!AppError::network_timeout("url").is_not_found());
        assert!(!AppError::invalid_name("x").is_not_found());
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        let request_result = client.get("not a valid url").build();

        match request_result {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::server_error("bind failed"),
            AppError::invalid_name("Zion"),
            AppError::invalid_player_id("bad id"),
            AppError::api_not_found("https://example.com"),
            AppError::api_server_error(500, "server error", "https://example.com"),
            AppError::api_client_error(400, "client error", "https://example.com"),
            AppError::api_rate_limit("rate limit", "https://example.com"),
            AppError::api_service_unavailable(503, "unavailable", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::no_game_log_table("https://example.com"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
