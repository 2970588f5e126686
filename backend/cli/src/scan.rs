//! The select → detect → present pipeline.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use textlens_core::{OcrProvider, Result, Selection, Selector, TextLensError};
use textlens_logging::{EventLogger, ScanEvent};
use textlens_vision::{detect_text, list_images};

use crate::dump::write_response_json;
use crate::present::write_page;

pub struct ScanOptions {
    pub images_dir: PathBuf,
    /// `None` skips writing the raw response.
    pub dump_path: Option<PathBuf>,
}

/// A selection decided up front, e.g. from command-line flags.
///
/// Resolves to nothing when the file is not among the listed images.
pub struct FixedSelector {
    pub selection: Selection,
}

impl Selector for FixedSelector {
    fn choose(&self, files: &[String]) -> Result<Option<Selection>> {
        if files.contains(&self.selection.file) {
            Ok(Some(self.selection.clone()))
        } else {
            warn!(file = %self.selection.file, "Requested file is not in the images directory");
            Ok(None)
        }
    }
}

/// List the images directory and let `selector` pick a file and mode.
///
/// Returns `NoSelection` when nothing was chosen, including when the
/// directory holds no images.
pub async fn select_image(options: &ScanOptions, selector: &dyn Selector) -> Result<Selection> {
    let files = list_images(&options.images_dir).await?;
    info!(dir = %options.images_dir.display(), count = files.len(), "Listed images");

    let Some(selection) = selector.choose(&files)? else {
        return Err(TextLensError::NoSelection);
    };
    EventLogger::log_event(ScanEvent::Selected {
        file: selection.file.clone(),
        mode: selection.mode.to_string(),
    });
    Ok(selection)
}

/// Send the selected image to `provider`, dump the raw response and print
/// the first page.
///
/// Returns `NoTextFound` before anything is written when the response has
/// no pages.
pub async fn detect_and_present<W: Write>(
    options: &ScanOptions,
    selection: &Selection,
    provider: &dyn OcrProvider,
    out: &mut W,
) -> Result<()> {
    let path = options.images_dir.join(&selection.file);
    let start = Instant::now();
    let response = match detect_text(provider, &path, selection.mode).await {
        Ok(response) => response,
        Err(e) => {
            EventLogger::log_event(ScanEvent::Failed {
                stage: "detect".into(),
                error_msg: e.to_string(),
            });
            return Err(e);
        }
    };

    let pages = response.pages();
    EventLogger::log_event(ScanEvent::Annotated {
        file: selection.file.clone(),
        pages: pages.len(),
        blocks: pages.first().map(|p| p.blocks.len()).unwrap_or(0),
        latency_ms: start.elapsed().as_millis() as u64,
    });

    let Some(page) = pages.first() else {
        return Err(TextLensError::NoTextFound);
    };

    if let Some(dump_path) = &options.dump_path {
        write_response_json(&response, dump_path)?;
        writeln!(out, "{} へ、もともとの json を書き出したよ。", dump_path.display())?;
    }

    write_page(out, page)
}
