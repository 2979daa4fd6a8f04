use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Top-level quiz data was valid JSON but not an object.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed quiz data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// `true` when the caller sent the wrong shape and should fix the request,
    /// as opposed to a failure while reading or decoding it.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalyzerError::InvalidInput(_))
    }

    pub fn kind(&self) -> &'static str {
        if self.is_invalid_input() {
            "bad_request"
        } else {
            "server_error"
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
