use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which text-detection feature the OCR service runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionMode {
    /// Sparse text, optimized for words in photographs.
    TextDetection,
    /// Dense text with document structure.
    DocumentTextDetection,
}

impl DetectionMode {
    /// Modes in the order they are offered to the user.
    pub const ALL: [DetectionMode; 2] = [Self::TextDetection, Self::DocumentTextDetection];

    /// Feature type name as the service spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextDetection => "TEXT_DETECTION",
            Self::DocumentTextDetection => "DOCUMENT_TEXT_DETECTION",
        }
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| {
                format!("unknown detection mode '{s}' (expected TEXT_DETECTION or DOCUMENT_TEXT_DETECTION)")
            })
    }
}

/// What the user picked in the selection stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub file: String,
    pub mode: DetectionMode,
}
