//! Image discovery in the images directory.

use std::path::Path;

use textlens_core::Result;
use tracing::debug;

/// Detect an image MIME type by file extension.
///
/// Only formats accepted by `images:annotate` are recognized.
pub fn detect_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png"          => Some("image/png"),
        "gif"          => Some("image/gif"),
        "webp"         => Some("image/webp"),
        "bmp"          => Some("image/bmp"),
        "ico"          => Some("image/x-icon"),
        "tiff" | "tif" => Some("image/tiff"),
        "raw"          => Some("image/x-raw"),
        _              => None,
    }
}

/// List image file names in `dir`, sorted.
///
/// Hidden entries, subdirectories and unsupported extensions are skipped.
pub async fn list_images(dir: &Path) -> Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot read images directory {}: {e}", dir.display()))
    })?;

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if detect_mime_type(Path::new(&name)).is_none() {
            debug!(file = %name, "Skipping non-image file");
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("textlens-images-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn detects_jpeg_case_insensitively() {
        assert_eq!(detect_mime_type(&PathBuf::from("photo.JPG")), Some("image/jpeg"));
        assert_eq!(detect_mime_type(&PathBuf::from("scan.png")), Some("image/png"));
    }

    #[test]
    fn rejects_unknown_extension() {
        assert_eq!(detect_mime_type(&PathBuf::from("notes.txt")), None);
        assert_eq!(detect_mime_type(&PathBuf::from("README")), None);
    }

    #[tokio::test]
    async fn lists_sorted_images_only() {
        let dir = scratch_dir("list");
        std::fs::write(dir.join("receipt.png"), b"png").unwrap();
        std::fs::write(dir.join("a.jpg"), b"jpg").unwrap();
        std::fs::write(dir.join(".gitkeep"), b"").unwrap();
        std::fs::write(dir.join("notes.txt"), b"txt").unwrap();
        std::fs::create_dir_all(dir.join("nested.png")).unwrap();

        let names = list_images(&dir).await.unwrap();
        assert_eq!(names, vec!["a.jpg".to_string(), "receipt.png".to_string()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn empty_directory_lists_nothing() {
        let dir = scratch_dir("empty");
        assert!(list_images(&dir).await.unwrap().is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_directory_is_io_error() {
        let dir = std::env::temp_dir().join("textlens-images-does-not-exist");
        assert!(matches!(
            list_images(&dir).await,
            Err(textlens_core::TextLensError::Io(_))
        ));
    }
}
