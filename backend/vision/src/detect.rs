use std::path::Path;

use textlens_core::{AnnotateImageResponse, DetectionMode, OcrProvider, Result};
use tracing::info;

/// Read an image and send it to the provider with the chosen feature.
///
/// The file is read in one go and its handle closed before the request is
/// issued. Provider errors are returned unchanged.
pub async fn detect_text(
    provider: &dyn OcrProvider,
    path: &Path,
    mode: DetectionMode,
) -> Result<AnnotateImageResponse> {
    let image = tokio::fs::read(path).await.map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot read image {}: {e}", path.display()))
    })?;

    info!(
        provider = provider.name(),
        path = %path.display(),
        bytes = image.len(),
        mode = %mode,
        "Detecting text"
    );

    provider.annotate(&image, mode).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockOcrProvider;
    use textlens_core::TextLensError;

    #[tokio::test]
    async fn sends_file_bytes_and_mode() {
        let path = std::env::temp_dir().join(format!("textlens-detect-{}.png", std::process::id()));
        std::fs::write(&path, b"12345").unwrap();

        let provider = MockOcrProvider::new("mock");
        let response = detect_text(&provider, &path, DetectionMode::DocumentTextDetection)
            .await
            .unwrap();

        assert!(!response.has_text());
        assert_eq!(provider.calls(), 1);
        assert_eq!(
            provider.last_request(),
            Some((5, DetectionMode::DocumentTextDetection))
        );
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_never_reaches_provider() {
        let provider = MockOcrProvider::new("mock");
        let result = detect_text(
            &provider,
            Path::new("/nonexistent/textlens/receipt.png"),
            DetectionMode::TextDetection,
        )
        .await;

        assert!(matches!(result, Err(TextLensError::Io(_))));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn provider_errors_propagate_unchanged() {
        let path = std::env::temp_dir().join(format!("textlens-detect-err-{}.png", std::process::id()));
        std::fs::write(&path, b"x").unwrap();

        let provider = MockOcrProvider::new("mock").with_failure("403", "API key not valid.");
        let result = detect_text(&provider, &path, DetectionMode::TextDetection).await;

        match result {
            Err(TextLensError::Remote { status, message }) => {
                assert_eq!(status, "403");
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
        std::fs::remove_file(&path).unwrap();
    }
}
