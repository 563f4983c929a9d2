//! # Call Overlay
//!
//! Modal card for the simulated outgoing call. While it is up, every key
//! except the hang-up keys is swallowed.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CallOverlayState` lives in `TuiState` (hang-up button hit area)
//! - `CallOverlay` is created each frame with the `CallTarget` as a prop

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::model::CallTarget;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::overlay::centered_rect;
use crate::tui::event::TuiEvent;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 11;
const HANGUP_LABEL: &str = "[ Hang up ]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    Hangup,
}

#[derive(Debug, Default)]
pub struct CallOverlayState {
    pub hangup_area: Rect,
}

impl EventHandler for CallOverlayState {
    type Event = CallEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CallEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('e') => {
                Some(CallEvent::Hangup)
            }
            TuiEvent::MouseClick(col, row)
                if self.hangup_area.contains(Position::new(*col, *row)) =>
            {
                Some(CallEvent::Hangup)
            }
            _ => None,
        }
    }
}

pub struct CallOverlay<'a> {
    pub state: &'a mut CallOverlayState,
    pub target: &'a CallTarget,
}

impl<'a> CallOverlay<'a> {
    pub fn new(state: &'a mut CallOverlayState, target: &'a CallTarget) -> Self {
        Self { state, target }
    }
}

impl Component for CallOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = centered_rect(WIDTH, HEIGHT, area);
        frame.render_widget(Clear, card);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Green))
            .title(Line::from(" Call ").centered());
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!(" {} ", self.target.avatar_or_default()),
                Style::default().fg(Color::Black).bg(Color::Green),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.target.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(detail) = &self.target.detail {
            lines.push(Line::from(Span::styled(
                detail.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Calling…",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
        )));

        let [body, controls] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(lines).centered(), body);

        let button = centered_rect(HANGUP_LABEL.len() as u16, 1, controls);
        frame.render_widget(
            Span::styled(
                HANGUP_LABEL,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            button,
        );
        self.state.hangup_area = button;
    }
}
