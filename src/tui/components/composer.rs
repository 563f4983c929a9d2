//! # Composer Component
//!
//! Single-line message input at the bottom of the conversation view.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter)
//! - Keep the cursor visible by scrolling the line horizontally
//!
//! ## State Management
//!
//! The draft itself belongs to `App`. The composer keeps an editing copy so
//! it can track a cursor, reports every edit as `ComposerEvent::DraftChanged`,
//! and is re-synced from `App::draft` each frame with [`Composer::sync`] so
//! that a send or a conversation switch clears it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Write a message…";
const SEND_HINT: &str = " ⏎ Send ";

/// High-level events emitted by the Composer
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// Text changed; carries the full new draft
    DraftChanged(String),
    /// Enter pressed
    Submit,
}

pub struct Composer {
    /// Editing copy of the draft
    pub buffer: String,
    /// Cursor byte offset into `buffer`
    cursor: usize,
    /// Byte offset of the first visible character
    scroll_start: usize,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll_start: 0,
            focused: true,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Adopt the app's draft if it diverged (send, selection change).
    pub fn sync(&mut self, draft: &str) {
        if self.buffer != draft {
            self.buffer = draft.to_string();
            self.cursor = self.buffer.len();
            self.scroll_start = 0;
        }
    }

    fn changed(&self) -> Option<ComposerEvent> {
        Some(ComposerEvent::DraftChanged(self.buffer.clone()))
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Slide the visible window so the cursor fits in `width` columns.
    fn update_scroll(&mut self, width: u16) {
        let width = width.saturating_sub(1) as usize;
        if self.cursor < self.scroll_start {
            self.scroll_start = self.cursor;
        }
        while self.buffer[self.scroll_start..self.cursor].width() > width
            && self.scroll_start < self.cursor
        {
            self.scroll_start = next_char_boundary(&self.buffer, self.scroll_start);
        }
    }
}

impl Component for Composer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let can_send = !self.buffer.trim().is_empty();
        let hint_style = if can_send {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Message ")
            .title_bottom(Line::from(Span::styled(SEND_HINT, hint_style)).right_aligned());
        let inner = block.inner(area);

        self.update_scroll(inner.width);

        let content = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(&self.buffer[self.scroll_start..])
        };
        frame.render_widget(content.block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let offset = self.buffer[self.scroll_start..self.cursor].width() as u16;
            frame.set_cursor_position((inner.x + offset.min(inner.width - 1), inner.y));
        }
    }
}

impl EventHandler for Composer {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ComposerEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line input: fold newlines into spaces
                let flattened: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flattened);
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(ComposerEvent::Submit),
            _ => None,
        }
    }
}

/// Byte offset of the char boundary before `pos` (0 at the start).
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

/// Byte offset of the char boundary after `pos` (len at the end).
fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map_or(s.len(), |c| pos + c.len_utf8())
}
