use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use textlens_core::{AnnotateImageResponse, DetectionMode, OcrProvider, Result, TextLensError};

/// An OCR provider that returns a canned response and records its calls.
pub struct MockOcrProvider {
    name: String,
    response: AnnotateImageResponse,
    failure: Option<(String, String)>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(usize, DetectionMode)>>,
}

impl MockOcrProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: AnnotateImageResponse::default(),
            failure: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_response(mut self, response: AnnotateImageResponse) -> Self {
        self.response = response;
        self
    }

    /// Make every call fail with a `Remote` error.
    pub fn with_failure(mut self, status: impl Into<String>, message: impl Into<String>) -> Self {
        self.failure = Some((status.into(), message.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Byte length and mode of the most recent request.
    pub fn last_request(&self) -> Option<(usize, DetectionMode)> {
        self.last_request.lock().ok().and_then(|guard| *guard)
    }
}

#[async_trait]
impl OcrProvider for MockOcrProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn annotate(&self, image: &[u8], mode: DetectionMode) -> Result<AnnotateImageResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some((image.len(), mode));
        }
        match &self.failure {
            Some((status, message)) => Err(TextLensError::remote(status, message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}
