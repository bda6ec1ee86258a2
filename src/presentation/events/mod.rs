//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Checks if key is a hard quit event (valid in any context).
#[must_use]
pub fn is_hard_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Checks if key is a soft quit event (valid outside text inputs).
#[must_use]
pub fn is_soft_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        }
    )
}

/// Checks if key is a submit event.
#[must_use]
pub fn is_submit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_hard_quit_events() {
        assert!(is_hard_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_hard_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_soft_quit_events() {
        assert!(is_soft_quit(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(!is_soft_quit(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_soft_quit(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_submit_event() {
        assert!(is_submit(&make_key_event(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_submit(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
