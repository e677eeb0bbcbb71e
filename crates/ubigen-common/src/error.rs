use thiserror::Error;

#[derive(Debug, Error)]
pub enum UbigenError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Cannot compute median: column '{0}' has no values")]
    EmptyInput(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure category, independent of which library raised the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    EmptyInput,
    Security,
    Config,
}

impl UbigenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            // A body that fails to decode surfaces through reqwest as well.
            UbigenError::Http(e) if e.is_decode() => ErrorKind::Parse,
            UbigenError::Http(_) | UbigenError::Status { .. } => ErrorKind::Network,
            UbigenError::Json(_) | UbigenError::Csv(_) | UbigenError::Parse(_) => ErrorKind::Parse,
            UbigenError::EmptyInput(_) => ErrorKind::EmptyInput,
            UbigenError::Security(_) => ErrorKind::Security,
            UbigenError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, UbigenError>;
