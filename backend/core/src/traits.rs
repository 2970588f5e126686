use async_trait::async_trait;

use crate::annotation::AnnotateImageResponse;
use crate::error::Result;
use crate::types::{DetectionMode, Selection};

/// Remote OCR backend.
///
/// Implementations perform exactly one request per call and hand back the
/// service's response unchanged, or a `Remote` error.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Provider name (e.g., "google-vision", "mock").
    fn name(&self) -> &str;

    /// Annotate raw image bytes with the given detection feature.
    async fn annotate(
        &self,
        image: &[u8],
        mode: DetectionMode,
    ) -> Result<AnnotateImageResponse>;
}

/// Picks an image file and a detection mode.
///
/// `Ok(None)` means the user aborted or there was nothing to choose from.
pub trait Selector {
    fn choose(&self, files: &[String]) -> Result<Option<Selection>>;
}
