//! # Dial Pad Overlay
//!
//! Modal keypad drawn above everything else, including the call card.
//!
//! ```text
//! ╭──────── Dial pad ────────╮
//! │╭────────────────────────╮│
//! ││555              ⌫   ✕ ││
//! │╰────────────────────────╯│
//! │                          │
//! │  [ 1 ]  [ 2 ]  [ 3 ]     │
//! │  ...                     │
//! │        [  Dial  ]        │
//! ╰── Esc Close · Del Clear ─╯
//! ```
//!
//! Each clickable cell's rect is recorded during render, so mouse clicks
//! map back to keypad input. A click outside the pad closes it (the
//! backdrop).

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::dialpad::{KEYPAD, is_keypad_char};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::overlay::centered_rect;
use crate::tui::event::TuiEvent;

const WIDTH: u16 = 32;
const HEIGHT: u16 = 16;
const KEY_WIDTH: u16 = 7;
const DIAL_LABEL: &str = "[  Dial  ]";
pub const DISPLAY_PLACEHOLDER: &str = "Enter number";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialpadEvent {
    Append(char),
    Delete,
    Clear,
    Dial,
    Close,
}

/// Hit areas from the last render.
#[derive(Debug, Default)]
pub struct DialpadState {
    pub pad_area: Rect,
    pub key_areas: Vec<(char, Rect)>,
    pub delete_area: Rect,
    pub clear_area: Rect,
    pub dial_area: Rect,
}

impl DialpadState {
    fn click(&self, col: u16, row: u16) -> Option<DialpadEvent> {
        let pos = Position::new(col, row);
        if !self.pad_area.contains(pos) {
            return Some(DialpadEvent::Close);
        }
        if let Some((key, _)) = self.key_areas.iter().find(|(_, r)| r.contains(pos)) {
            return Some(DialpadEvent::Append(*key));
        }
        if self.delete_area.contains(pos) {
            Some(DialpadEvent::Delete)
        } else if self.clear_area.contains(pos) {
            Some(DialpadEvent::Clear)
        } else if self.dial_area.contains(pos) {
            Some(DialpadEvent::Dial)
        } else {
            None
        }
    }
}

impl EventHandler for DialpadState {
    type Event = DialpadEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialpadEvent> {
        match event {
            TuiEvent::InputChar(c) if is_keypad_char(*c) => Some(DialpadEvent::Append(*c)),
            TuiEvent::InputChar('c') | TuiEvent::Delete => Some(DialpadEvent::Clear),
            TuiEvent::Backspace => Some(DialpadEvent::Delete),
            TuiEvent::Submit => Some(DialpadEvent::Dial),
            TuiEvent::Escape => Some(DialpadEvent::Close),
            TuiEvent::MouseClick(col, row) => self.click(*col, *row),
            _ => None,
        }
    }
}

pub struct Dialpad<'a> {
    pub state: &'a mut DialpadState,
    pub buffer: &'a str,
}

impl<'a> Dialpad<'a> {
    pub fn new(state: &'a mut DialpadState, buffer: &'a str) -> Self {
        Self { state, buffer }
    }

    fn render_display(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [number_area, delete_area, clear_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        let number = if self.buffer.is_empty() {
            Span::styled(DISPLAY_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.buffer, Style::default().add_modifier(Modifier::BOLD))
        };
        frame.render_widget(number, number_area);
        frame.render_widget(Paragraph::new("⌫").centered(), delete_area);
        frame.render_widget(Paragraph::new("✕").centered(), clear_area);

        self.state.delete_area = delete_area;
        self.state.clear_area = clear_area;
    }

    fn render_keys(&mut self, frame: &mut Frame, area: Rect) {
        self.state.key_areas.clear();
        let rows = Layout::vertical([Constraint::Length(1); 4])
            .spacing(1)
            .split(area);
        for (row_index, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Length(KEY_WIDTH); 3])
                .flex(Flex::Center)
                .spacing(1)
                .split(*row_area);
            for (col_index, cell) in cells.iter().enumerate() {
                let key = KEYPAD[row_index * 3 + col_index];
                frame.render_widget(
                    Span::styled(
                        format!("[ {key} ]"),
                        Style::default().fg(Color::Cyan),
                    ),
                    *cell,
                );
                self.state.key_areas.push((key, *cell));
            }
        }
    }
}

impl Component for Dialpad<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let pad = centered_rect(WIDTH, HEIGHT, area);
        frame.render_widget(Clear, pad);
        self.state.pad_area = pad;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(" Dial pad ").centered())
            .title_bottom(Line::from(" Esc Close · Del Clear ").centered());
        let inner = block.inner(pad);
        frame.render_widget(block, pad);

        let [display, _, keys, _, dial] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_display(frame, display);
        self.render_keys(frame, keys);

        let can_dial = !self.buffer.trim().is_empty();
        let dial_style = if can_dial {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = centered_rect(DIAL_LABEL.len() as u16, 1, dial);
        frame.render_widget(Span::styled(DIAL_LABEL, dial_style), button);
        self.state.dial_area = button;
    }
}
