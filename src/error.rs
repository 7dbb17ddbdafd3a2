use thiserror::Error;

/// Errors that can occur while talking to the recipe service or setting up the widget
#[derive(Error, Debug)]
pub enum DishubError {
    /// The request never produced a response (connection, TLS, timeout)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("Service responded with status {0}")]
    Status(u16),

    /// The response body did not match the expected schema
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// No API key in configuration or environment
    #[error("SPOONACULAR_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

/// How a request failed, as recorded in the view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Status(u16),
    Malformed,
}

impl DishubError {
    /// Classify a request failure. Setup errors count as transport failures
    /// since no response was ever received.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            DishubError::Status(code) => FailureKind::Status(*code),
            DishubError::Malformed(_) => FailureKind::Malformed,
            _ => FailureKind::Transport,
        }
    }
}
