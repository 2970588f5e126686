use thiserror::Error;

/// Top-level error type for a textlens scan.
#[derive(Debug, Error)]
pub enum TextLensError {
    #[error("no image or detection mode was selected")]
    NoSelection,

    #[error("no text was found in the image")]
    NoTextFound,

    #[error("OCR service error ({status}): {message}")]
    Remote { status: String, message: String },

    #[error("malformed OCR response: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TextLensError {
    pub fn remote(status: impl ToString, message: impl Into<String>) -> Self {
        Self::Remote {
            status: status.to_string(),
            message: message.into(),
        }
    }

    /// Outcomes that end the run normally with a friendly message.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::NoSelection | Self::NoTextFound)
    }

    /// Casual console message for the benign outcomes.
    pub fn friendly_message(&self) -> Option<&'static str> {
        match self {
            Self::NoSelection => Some("何か選ばなかったみたいだね..."),
            Self::NoTextFound => Some("画像からテキストが見つからなかったみたいだね…"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextLensError>;
