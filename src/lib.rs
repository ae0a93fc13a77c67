pub mod analysis;
pub mod polarity;

pub use analysis::{AnalysisRequest, AnalysisResponse, Sentiment};
pub use polarity::{AnalysisError, LexiconAnalyzer, PolarityAnalyzer};

use serde::{Deserialize, Serialize};

/// Error body returned by the server for any non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Error {
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: '{}'", self.status, self.message)
    }
}

impl std::error::Error for Error {}
