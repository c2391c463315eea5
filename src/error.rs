//! Error types for the roomctl CLI

use thiserror::Error;

/// Result type alias for roomctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Not signed in. Run `roomctl login` first.")]
    NotSignedIn,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Durable storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to write storage file {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Storage file {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Routing errors
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("No route matches `{0}`. Run `roomctl routes` to list available paths.")]
    NotFound(String),

    #[error("Invalid value `{value}` for route parameter `{param}`")]
    InvalidParam { param: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized("Incorrect email or password".to_string());
        assert!(err.to_string().contains("Incorrect email or password"));
    }

    #[test]
    fn test_api_error_not_signed_in_message() {
        let err = ApiError::NotSignedIn;
        assert!(err.to_string().contains("roomctl login"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("Room not found".to_string());
        assert!(err.to_string().contains("Room not found"));
    }

    #[test]
    fn test_api_error_bad_request() {
        let err = ApiError::BadRequest("End date must be after start date".to_string());
        assert!(err.to_string().contains("End date"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_storage_error_mentions_path() {
        let err = StorageError::Write {
            path: "/tmp/storage.yaml".to_string(),
            reason: "disk full".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/storage.yaml"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_route_error_not_found() {
        let err = RouteError::NotFound("/nowhere".to_string());
        assert!(err.to_string().contains("/nowhere"));
        assert!(err.to_string().contains("roomctl routes"));
    }

    #[test]
    fn test_route_error_invalid_param() {
        let err = RouteError::InvalidParam {
            param: "id".to_string(),
            value: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`abc`"));
        assert!(msg.contains("`id`"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::NotSignedIn.into();

        match err {
            Error::Api(ApiError::NotSignedIn) => (),
            _ => panic!("Expected Error::Api(ApiError::NotSignedIn)"),
        }
    }

    #[test]
    fn test_error_from_route_error() {
        let err: Error = RouteError::NotFound("/x".to_string()).into();

        match err {
            Error::Route(RouteError::NotFound(path)) => assert_eq!(path, "/x"),
            _ => panic!("Expected Error::Route(RouteError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
