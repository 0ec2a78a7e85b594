use graph_beta_serialization::SerializationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Service error {status} ({code}): {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },
    #[error("Response did not contain a body")]
    EmptyResponse,
}

impl GraphError {
    /// HTTP status of a service error.
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for GraphError {
    fn from(error: reqwest::Error) -> Self {
        GraphError::Connection(error.to_string())
    }
}

impl From<url::ParseError> for GraphError {
    fn from(error: url::ParseError) -> Self {
        GraphError::Config(error.to_string())
    }
}

// Token providers surface their own errors through these conversions
impl From<Box<dyn std::error::Error + Send + Sync>> for GraphError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        GraphError::Auth(error.to_string())
    }
}

impl From<anyhow::Error> for GraphError {
    fn from(error: anyhow::Error) -> Self {
        GraphError::Auth(error.to_string())
    }
}
