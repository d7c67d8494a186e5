//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use nexus_app::message::Message;
use nexus_app::InputKey;
use nexus_core::prelude::*;

/// Frame budget between ticks (20 FPS)
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events, yielding a Tick when nothing arrives in time
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(
            key_event_to_input(plain(KeyCode::Char('a'))),
            Some(InputKey::Char('a'))
        );
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
        assert!(key_event_to_input(key).unwrap().is_force_quit());
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_event_to_input(plain(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(plain(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(plain(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(key_event_to_input(plain(KeyCode::Right)), Some(InputKey::Right));
        assert_eq!(key_event_to_input(plain(KeyCode::PageUp)), Some(InputKey::PageUp));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_event_to_input(plain(KeyCode::Enter)), Some(InputKey::Enter));
        assert_eq!(key_event_to_input(plain(KeyCode::Esc)), Some(InputKey::Esc));
        assert_eq!(key_event_to_input(plain(KeyCode::Tab)), Some(InputKey::Tab));
        assert_eq!(
            key_event_to_input(plain(KeyCode::Backspace)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        assert_eq!(
            key_event_to_input(plain(KeyCode::BackTab)),
            Some(InputKey::BackTab)
        );
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(key_event_to_input(plain(KeyCode::F(5))), None);
        assert_eq!(key_event_to_input(plain(KeyCode::Insert)), None);
    }
}
