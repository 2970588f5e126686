//! Google Cloud Vision `images:annotate` provider.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use textlens_core::{AnnotateImageResponse, DetectionMode, OcrProvider, Result, TextLensError};
use textlens_logging::redact_sensitive_data;

pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";

/// How requests authenticate against the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    /// OAuth2 access token, sent as a bearer token. The quota project is
    /// billed via `x-goog-user-project` when set.
    AccessToken {
        token: String,
        quota_project: Option<String>,
    },
}

/// Cloud Vision OCR provider.
pub struct GoogleVisionProvider {
    client: Client,
    endpoint: String,
    credentials: Credentials,
    language_hints: Vec<String>,
}

impl GoogleVisionProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials,
            language_hints: Vec::new(),
        }
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn with_language_hints(mut self, hints: Vec<String>) -> Self {
        self.language_hints = hints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TextLensError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(self)
    }

    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.endpoint.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct BatchAnnotateImagesRequest<'a> {
    requests: Vec<AnnotateImageRequest<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageRequest<'a> {
    image: Image,
    features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_context: Option<ImageContext<'a>>,
}

#[derive(Serialize)]
struct Image {
    content: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: DetectionMode,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageContext<'a> {
    language_hints: &'a [String],
}

#[derive(Deserialize)]
struct BatchAnnotateImagesResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Build the JSON body for a single-image annotate request.
fn build_request_body(image: &[u8], mode: DetectionMode, language_hints: &[String]) -> serde_json::Value {
    let body = BatchAnnotateImagesRequest {
        requests: vec![AnnotateImageRequest {
            image: Image {
                content: STANDARD.encode(image),
            },
            features: vec![Feature { kind: mode }],
            image_context: (!language_hints.is_empty()).then_some(ImageContext { language_hints }),
        }],
    };
    // Serializing plain strings and vectors cannot fail.
    serde_json::to_value(body).unwrap_or_default()
}

/// Turn a non-success HTTP reply into a `Remote` error.
fn error_from_body(status: StatusCode, body: &str) -> TextLensError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let label = match envelope.error.status {
                Some(s) => format!("{} {}", status.as_u16(), s),
                None => status.as_u16().to_string(),
            };
            TextLensError::remote(label, envelope.error.message)
        }
        Err(_) => TextLensError::remote(status.as_u16(), redact_sensitive_data(body.trim())),
    }
}

/// Extract the single image response, surfacing a per-image error.
fn parse_batch_response(body: &str) -> Result<AnnotateImageResponse> {
    let batch: BatchAnnotateImagesResponse = serde_json::from_str(body)
        .map_err(|e| TextLensError::MalformedResponse(format!("invalid annotate response: {e}")))?;
    let response = batch
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| TextLensError::MalformedResponse("annotate response has no entries".into()))?;

    match &response.error {
        Some(status) if status.code != 0 => Err(TextLensError::remote(
            format!("code {}", status.code),
            status.message.clone(),
        )),
        _ => Ok(response),
    }
}

#[async_trait]
impl OcrProvider for GoogleVisionProvider {
    fn name(&self) -> &str {
        "google-vision"
    }

    async fn annotate(&self, image: &[u8], mode: DetectionMode) -> Result<AnnotateImageResponse> {
        let start = Instant::now();
        let body = build_request_body(image, mode, &self.language_hints);

        let mut request = self.client.post(self.annotate_url()).json(&body);
        request = match &self.credentials {
            Credentials::ApiKey(key) => request.query(&[("key", key)]),
            Credentials::AccessToken { token, quota_project } => {
                let request = request.bearer_auth(token);
                match quota_project {
                    Some(project) => request.header("x-goog-user-project", project),
                    None => request,
                }
            }
        };

        debug!(mode = %mode, bytes = image.len(), endpoint = %self.endpoint, "Sending annotate request");

        let response = request.send().await.map_err(|e| {
            TextLensError::remote("transport", redact_sensitive_data(&e.without_url().to_string()))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            TextLensError::remote(status.as_u16(), redact_sensitive_data(&e.without_url().to_string()))
        })?;

        if !status.is_success() {
            return Err(error_from_body(status, &text));
        }

        let annotated = parse_batch_response(&text)?;
        info!(
            mode = %mode,
            pages = annotated.pages().len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Annotate request completed"
        );
        Ok(annotated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let body = build_request_body(b"abc", DetectionMode::TextDetection, &[]);
        let request = &body["requests"][0];
        assert_eq!(request["image"]["content"], "YWJj");
        assert_eq!(request["features"][0]["type"], "TEXT_DETECTION");
        assert!(request.get("imageContext").is_none());
    }

    #[test]
    fn request_body_carries_language_hints() {
        let hints = vec!["ja".to_string(), "en".to_string()];
        let body = build_request_body(b"x", DetectionMode::DocumentTextDetection, &hints);
        let request = &body["requests"][0];
        assert_eq!(request["features"][0]["type"], "DOCUMENT_TEXT_DETECTION");
        assert_eq!(request["imageContext"]["languageHints"][0], "ja");
        assert_eq!(request["imageContext"]["languageHints"][1], "en");
    }

    #[test]
    fn parses_first_response() {
        let body = r#"{"responses":[{"fullTextAnnotation":{"pages":[{"blocks":[]}],"text":""}}]}"#;
        let response = parse_batch_response(body).unwrap();
        assert_eq!(response.pages().len(), 1);
    }

    #[test]
    fn empty_response_object_has_no_pages() {
        let response = parse_batch_response(r#"{"responses":[{}]}"#).unwrap();
        assert!(!response.has_text());
    }

    #[test]
    fn per_image_error_is_remote() {
        let body = r#"{"responses":[{"error":{"code":3,"message":"Bad image data."}}]}"#;
        match parse_batch_response(body) {
            Err(TextLensError::Remote { status, message }) => {
                assert_eq!(status, "code 3");
                assert_eq!(message, "Bad image data.");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn missing_responses_is_malformed() {
        assert!(matches!(
            parse_batch_response(r#"{"responses":[]}"#),
            Err(TextLensError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_batch_response("not json"),
            Err(TextLensError::MalformedResponse(_))
        ));
    }

    #[test]
    fn http_error_body_is_decoded() {
        let body = r#"{"error":{"code":403,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#;
        match error_from_body(StatusCode::FORBIDDEN, body) {
            TextLensError::Remote { status, message } => {
                assert_eq!(status, "403 PERMISSION_DENIED");
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn http_error_plain_body_is_kept() {
        match error_from_body(StatusCode::BAD_GATEWAY, "upstream down\n") {
            TextLensError::Remote { status, message } => {
                assert_eq!(status, "502");
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn annotate_url_tolerates_trailing_slash() {
        let provider = GoogleVisionProvider::new(Credentials::ApiKey("k".into()))
            .with_endpoint("http://localhost:9000/");
        assert_eq!(provider.annotate_url(), "http://localhost:9000/v1/images:annotate");
    }
}
