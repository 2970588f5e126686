//! Keyboard Input Handler
//!
//! Processes crossterm key events and updates `PromptState`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{PromptAction, PromptState};

/// Handles a single key event.
pub fn handle_key_event(key: KeyEvent, state: &mut PromptState) -> PromptAction {
    // Windows reports releases too.
    if key.kind == KeyEventKind::Release {
        return PromptAction::Pending;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => PromptAction::Abort,
        KeyCode::Esc | KeyCode::Char('q') => PromptAction::Abort,
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_up();
            PromptAction::Pending
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_down();
            PromptAction::Pending
        }
        KeyCode::Enter => {
            if state.current().is_some() {
                PromptAction::Submit(state.cursor)
            } else {
                PromptAction::Abort
            }
        }
        _ => PromptAction::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn prompt() -> PromptState {
        PromptState::new("pick", vec!["receipt.png".into(), "menu.jpg".into()])
    }

    #[test]
    fn enter_submits_cursor() {
        let mut state = prompt();
        assert_eq!(handle_key_event(key(KeyCode::Down), &mut state), PromptAction::Pending);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mut state), PromptAction::Submit(1));
    }

    #[test]
    fn vim_keys_move_cursor() {
        let mut state = prompt();
        handle_key_event(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.cursor, 1);
        handle_key_event(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn escape_and_ctrl_c_abort() {
        let mut state = prompt();
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mut state), PromptAction::Abort);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut state), PromptAction::Abort);
    }

    #[test]
    fn plain_c_is_ignored() {
        let mut state = prompt();
        assert_eq!(handle_key_event(key(KeyCode::Char('c')), &mut state), PromptAction::Pending);
    }

    #[test]
    fn enter_on_empty_prompt_aborts() {
        let mut state = PromptState::new("pick", Vec::new());
        assert_eq!(handle_key_event(key(KeyCode::Enter), &mut state), PromptAction::Abort);
    }
}
