use thiserror::Error;

/// Message shown to the user for any non-2xx answer from the service.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Failed to upload file/Backend overloaded, please try again later";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{UPSTREAM_FAILURE_MESSAGE}")]
    Upstream { status: u16 },

    #[error("Could not reach the flashcard service: {0}")]
    Network(String),

    #[error("Unexpected response from the flashcard service: {0}")]
    Parse(String),

    #[error("The flashcard service is not configured: {0}")]
    Unconfigured(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(error: reqwest::Error) -> Self {
        GenerateError::Network(error.to_string())
    }
}

impl From<ConfigError> for GenerateError {
    fn from(error: ConfigError) -> Self {
        GenerateError::Unconfigured(error.to_string())
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(error: serde_json::Error) -> Self {
        GenerateError::Parse(error.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FLASHDECK_API_URL is not set")]
    MissingEndpoint,

    #[error("FLASHDECK_API_URL is not an http(s) URL: {0}")]
    InvalidEndpoint(String),
}
