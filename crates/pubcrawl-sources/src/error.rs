/// Failure to turn fetched bytes into a pub list
#[derive(Debug, thiserror::Error)]
#[error("invalid pub data: {message}")]
pub struct DecodeError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Both variants are fatal to a run; nothing retries or falls back.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to fetch pubs from {source_name}: {message}")]
    FetchFailed { source_name: String, message: String },
    #[error(transparent)]
    DecodeFailed(#[from] DecodeError),
}

impl SourceError {
    pub fn fetch_failed(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::FetchFailed {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}
