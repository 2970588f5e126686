//! Prompt State
//!
//! A single-choice list prompt: a question, its choices, the cursor, and
//! the first choice of the visible window.

use std::ops::Range;

/// Outcome of feeding a key to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    /// Keep waiting for input; the prompt needs a redraw.
    Pending,
    /// The user confirmed the choice at this index.
    Submit(usize),
    /// The user cancelled the prompt.
    Abort,
}

pub struct PromptState {
    pub message: String,
    pub choices: Vec<String>,
    pub cursor: usize,
    pub offset: usize,
}

impl PromptState {
    pub fn new(message: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            message: message.into(),
            choices,
            cursor: 0,
            offset: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.choices.len() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn move_down(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.choices.len();
    }

    pub fn current(&self) -> Option<&str> {
        self.choices.get(self.cursor).map(String::as_str)
    }

    /// Choices shown in a window of at most `height` rows, scrolled just
    /// enough to keep the cursor inside it.
    pub fn visible_range(&mut self, height: usize) -> Range<usize> {
        let height = height.max(1).min(self.choices.len());
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
        self.offset = self.offset.min(self.choices.len() - height);
        self.offset..self.offset + height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> PromptState {
        PromptState::new("pick", vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = prompt();
        state.move_up();
        assert_eq!(state.current(), Some("c"));
        state.move_down();
        assert_eq!(state.current(), Some("a"));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = prompt();
        for _ in 0..10 {
            state.move_down();
            assert!(state.cursor < state.choices.len());
        }
    }

    #[test]
    fn window_follows_cursor() {
        let choices = (0..300).map(|i| format!("scan-{i:03}.png")).collect();
        let mut state = PromptState::new("pick", choices);
        assert_eq!(state.visible_range(10), 0..10);

        for _ in 0..15 {
            state.move_down();
        }
        assert_eq!(state.visible_range(10), 6..16);

        // Moving back up inside the window does not scroll.
        state.move_up();
        assert_eq!(state.visible_range(10), 6..16);

        // Wrapping to the end shows the last page.
        state.cursor = 0;
        state.visible_range(10);
        state.move_up();
        assert_eq!(state.visible_range(10), 290..300);
    }

    #[test]
    fn window_never_exceeds_choices() {
        let mut state = prompt();
        assert_eq!(state.visible_range(50), 0..3);
        assert_eq!(PromptState::new("pick", Vec::new()).visible_range(5), 0..0);
    }

    #[test]
    fn empty_prompt_has_no_current() {
        let mut state = PromptState::new("pick", Vec::new());
        state.move_down();
        state.move_up();
        assert_eq!(state.current(), None);
    }
}
