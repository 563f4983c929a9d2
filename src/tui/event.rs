use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::core::model::Panel;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global
    ForceQuit, // Ctrl+C, Ctrl+Q
    Resize,
    NextPanel,
    PrevPanel,
    ShowPanel(Panel), // F1 / F2 / F3
    StartCall,        // Ctrl+T
    OpenDialpad,      // Ctrl+P

    // Routed to the focused component
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    Submit,
    Escape,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseClick(u16, u16),
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`. Read errors count as no event.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            // Ignore release/repeat reports from the kitty protocol
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::StartCall),
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::OpenDialpad),
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Tab) => Some(TuiEvent::NextPanel),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevPanel),
        (_, KeyCode::F(1)) => Some(TuiEvent::ShowPanel(Panel::Chats)),
        (_, KeyCode::F(2)) => Some(TuiEvent::ShowPanel(Panel::Conversation)),
        (_, KeyCode::F(3)) => Some(TuiEvent::ShowPanel(Panel::Details)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('t')),
            Some(TuiEvent::StartCall)
        );
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('p')),
            Some(TuiEvent::OpenDialpad)
        );
    }

    #[test]
    fn test_plain_and_shifted_chars_are_input() {
        assert_eq!(
            map_key(KeyModifiers::NONE, KeyCode::Char('t')),
            Some(TuiEvent::InputChar('t'))
        );
        assert_eq!(
            map_key(KeyModifiers::SHIFT, KeyCode::Char('#')),
            Some(TuiEvent::InputChar('#'))
        );
    }

    #[test]
    fn test_function_keys_pick_panels() {
        assert_eq!(
            map_key(KeyModifiers::NONE, KeyCode::F(3)),
            Some(TuiEvent::ShowPanel(Panel::Details))
        );
        assert_eq!(
            map_key(KeyModifiers::SHIFT, KeyCode::BackTab),
            Some(TuiEvent::PrevPanel)
        );
    }
}
