//! Remote OCR adapters and image discovery for textlens.

pub mod detect;
pub mod google;
pub mod images;
pub mod mock;

pub use detect::detect_text;
pub use google::{Credentials, GoogleVisionProvider, DEFAULT_ENDPOINT};
pub use images::{detect_mime_type, list_images};
pub use mock::MockOcrProvider;
