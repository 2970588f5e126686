//! Persisting the raw annotation response as JSON.

use std::path::Path;

use textlens_core::{AnnotateImageResponse, Result};
use tracing::debug;

/// Write the response with two-space indentation; non-ASCII stays unescaped.
pub fn write_response_json(response: &AnnotateImageResponse, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(response)?;
    std::fs::write(path, json).map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot write {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), "Wrote annotate response");
    Ok(())
}

/// Load a response previously written by [`write_response_json`] (or saved
/// from the REST API directly).
pub fn read_response_json(path: &Path) -> Result<AnnotateImageResponse> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot read {}: {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&raw)?)
}
