//! Prompt Rendering
//!
//! Draws `PromptState` inline below the cursor and redraws it in place.

use std::io::Write;
use std::ops::Range;

use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    style::{style, Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};

use crate::app::PromptState;

/// Header line shown above the choices, and kept once answered.
pub fn header_line(state: &PromptState) -> String {
    format!("[?] {}: {}", state.message, state.current().unwrap_or(""))
}

/// Plain-text lines of the prompt for the choices in `window`, cursor row
/// marked with `>`.
pub fn prompt_lines(state: &PromptState, window: Range<usize>) -> Vec<String> {
    let mut lines = Vec::with_capacity(window.len() + 1);
    lines.push(header_line(state));
    for (i, choice) in state.choices[window.clone()].iter().enumerate() {
        let marker = if window.start + i == state.cursor { '>' } else { ' ' };
        lines.push(format!(" {marker} {choice}"));
    }
    lines
}

/// Draw the prompt within `max_rows` terminal rows, erasing the `drawn`
/// lines of the previous frame first. Returns the number of lines now on
/// screen, which stays below `max_rows` whenever the terminal has room for
/// the header and at least one choice.
pub fn draw_prompt<W: Write>(
    out: &mut W,
    state: &mut PromptState,
    drawn: u16,
    max_rows: u16,
) -> std::io::Result<u16> {
    erase(out, drawn)?;
    // One row for the header, one for the line the cursor is left on.
    let height = max_rows.saturating_sub(2).max(1);
    let window = state.visible_range(usize::from(height));
    let highlight = state.cursor - window.start + 1;
    let lines = prompt_lines(state, window);
    for (i, line) in lines.iter().enumerate() {
        if i == highlight {
            queue!(out, PrintStyledContent(style(line.as_str()).cyan().bold()), Print("\r\n"))?;
        } else {
            queue!(out, Print(line), Print("\r\n"))?;
        }
    }
    out.flush()?;
    Ok(u16::try_from(lines.len()).unwrap_or(u16::MAX).min(height + 1))
}

/// Replace the prompt with a single line; the answer is blank on abort.
pub fn finish_prompt<W: Write>(
    out: &mut W,
    state: &PromptState,
    drawn: u16,
    answered: bool,
) -> std::io::Result<()> {
    erase(out, drawn)?;
    let line = if answered {
        header_line(state)
    } else {
        format!("[?] {}:", state.message)
    };
    queue!(out, Print(line), Print("\r\n"))?;
    out.flush()
}

fn erase<W: Write>(out: &mut W, drawn: u16) -> std::io::Result<()> {
    if drawn > 0 {
        queue!(out, MoveToPreviousLine(drawn), Clear(ClearType::FromCursorDown))?;
    }
    Ok(())
}
