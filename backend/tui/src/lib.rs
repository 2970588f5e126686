//! Interactive selection prompts for the textlens CLI.
//!
//! Each prompt is a keyboard-navigated single-choice list drawn inline on
//! stdout with crossterm.

pub mod app;
pub mod input;
pub mod render;

use std::io::stdout;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use tracing::debug;

use textlens_core::{DetectionMode, Result, Selection, Selector};

pub use app::{PromptAction, PromptState};
pub use input::handle_key_event;
pub use render::{draw_prompt, prompt_lines};

const FILE_MESSAGE: &str = "画像ファイルを選んでね";
const MODE_MESSAGE: &str = "どのテキスト検出 feature にする？";
const FALLBACK_ROWS: u16 = 24;

/// Restores the terminal when dropped, whichever way the prompt ends.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        let _ = disable_raw_mode();
    }
}

/// Ask the user to pick one of `choices`.
///
/// Returns the chosen index, or `None` on abort or when there is nothing to
/// choose from.
pub fn prompt_select(message: &str, choices: Vec<String>) -> std::io::Result<Option<usize>> {
    if choices.is_empty() {
        return Ok(None);
    }

    let mut state = PromptState::new(message, choices);
    let mut out = stdout();
    let _guard = RawModeGuard::enter()?;
    let mut drawn = draw_prompt(&mut out, &mut state, 0, terminal_rows())?;

    loop {
        if let Event::Key(key) = event::read()? {
            match handle_key_event(key, &mut state) {
                PromptAction::Pending => {
                    drawn = draw_prompt(&mut out, &mut state, drawn, terminal_rows())?;
                }
                PromptAction::Submit(index) => {
                    render::finish_prompt(&mut out, &state, drawn, true)?;
                    return Ok(Some(index));
                }
                PromptAction::Abort => {
                    render::finish_prompt(&mut out, &state, drawn, false)?;
                    return Ok(None);
                }
            }
        }
    }
}

/// Height of the terminal, re-read on every frame so resizes are honoured.
fn terminal_rows() -> u16 {
    terminal::size().map(|(_, rows)| rows).unwrap_or(FALLBACK_ROWS)
}

/// Prompts on the controlling terminal for a file, then a detection mode.
#[derive(Default)]
pub struct TerminalSelector {
    /// Skip the mode prompt and use this mode.
    pub preset_mode: Option<DetectionMode>,
}

impl TerminalSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Option<DetectionMode>) -> Self {
        self.preset_mode = mode;
        self
    }
}

impl Selector for TerminalSelector {
    fn choose(&self, files: &[String]) -> Result<Option<Selection>> {
        let Some(file_index) = prompt_select(FILE_MESSAGE, files.to_vec())? else {
            debug!("File prompt aborted");
            return Ok(None);
        };

        let mode = match self.preset_mode {
            Some(mode) => mode,
            None => {
                let labels = DetectionMode::ALL.iter().map(|m| m.to_string()).collect();
                match prompt_select(MODE_MESSAGE, labels)? {
                    Some(i) => DetectionMode::ALL[i],
                    None => {
                        debug!("Mode prompt aborted");
                        return Ok(None);
                    }
                }
            }
        };

        Ok(Some(Selection {
            file: files[file_index].clone(),
            mode,
        }))
    }
}
