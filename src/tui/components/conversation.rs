//! # Conversation View
//!
//! Header, scrollable message history and composer for the selected
//! conversation.
//!
//! ## Architecture
//!
//! `ConversationView` is a transient component (created each frame) that
//! wraps `&'a mut ConversationViewState` (persistent scroll state), the
//! persistent `Composer`, and the resolved conversation as props.
//!
//! ## Auto-scroll
//!
//! The state remembers which `(conversation id, message count)` it last
//! drew. When that pair changes (a different conversation, or a message was
//! appended) the render pass pins the view to the newest message before
//! drawing. Manual scrolling is left alone until the pair changes again.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::model::Conversation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::composer::Composer;
use crate::tui::components::message::{BUBBLE_GAP, Bubble};
use crate::tui::event::TuiEvent;

const HEADER_HEIGHT: u16 = 2;
const COMPOSER_HEIGHT: u16 = 3;

#[derive(Default)]
pub struct ConversationViewState {
    pub scroll_state: ScrollViewState,
    /// `(conversation id, message count)` from the last render
    pub last_rendered: Option<(String, usize)>,
    /// Message history area from the last render (for mouse wheel routing)
    pub history_area: Rect,
}

impl ConversationViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what is about to be drawn. Returns true when the view must be
    /// scrolled to its end.
    pub fn observe(&mut self, id: &str, message_count: usize) -> bool {
        let unchanged = self
            .last_rendered
            .as_ref()
            .is_some_and(|(last_id, last_count)| last_id == id && *last_count == message_count);
        if unchanged {
            return false;
        }
        self.last_rendered = Some((id.to_string(), message_count));
        true
    }
}

impl EventHandler for ConversationViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

pub struct ConversationView<'a> {
    pub state: &'a mut ConversationViewState,
    pub composer: &'a mut Composer,
    pub conversation: Option<&'a Conversation>,
    pub focused: bool,
}

impl<'a> ConversationView<'a> {
    pub fn new(
        state: &'a mut ConversationViewState,
        composer: &'a mut Composer,
        conversation: Option<&'a Conversation>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            composer,
            conversation,
            focused,
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, conversation: &Conversation) {
        let dim = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", conversation.avatar),
                    Style::default().fg(Color::Black).bg(Color::Gray),
                ),
                Span::raw(" "),
                Span::styled(
                    conversation.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" · ", dim),
                Span::styled(conversation.status.clone(), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::raw("     "),
                Span::styled(conversation.virtual_number.clone(), dim),
                Span::styled("   Ctrl+T Call", Style::default().fg(Color::Yellow)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_history(&mut self, frame: &mut Frame, area: Rect, conversation: &Conversation) {
        self.state.history_area = area;
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        let heights: Vec<u16> = conversation
            .messages
            .iter()
            .map(|m| Bubble::new(m).layout(content_width).height)
            .collect();
        let total_height: u16 = heights
            .iter()
            .map(|h| h.saturating_add(BUBBLE_GAP))
            .fold(0u16, u16::saturating_add);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (message, height) in conversation.messages.iter().zip(heights) {
            scroll_view.render_widget(Bubble::new(message), Rect::new(0, y, content_width, height));
            y = y.saturating_add(height + BUBBLE_GAP);
        }

        if self
            .state
            .observe(&conversation.id, conversation.messages.len())
        {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for ConversationView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Conversation ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(conversation) = self.conversation else {
            let empty = Paragraph::new("No conversation selected.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, inner);
            return;
        };

        let [header_area, history_area, composer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(COMPOSER_HEIGHT),
        ])
        .areas(inner);

        self.render_header(frame, header_area, conversation);
        self.render_history(frame, history_area, conversation);

        self.composer.focused = self.focused;
        self.composer.render(frame, composer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Author, Message};
    use crate::core::seed::builtin_conversations;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(
        terminal: &mut Terminal<TestBackend>,
        state: &mut ConversationViewState,
        composer: &mut Composer,
        conversation: Option<&Conversation>,
    ) {
        terminal
            .draw(|f| {
                ConversationView::new(state, composer, conversation, true).render(f, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_observe_detects_changes() {
        let mut state = ConversationViewState::new();
        assert!(state.observe("1", 5));
        assert!(!state.observe("1", 5));
        assert!(state.observe("1", 6));
        assert!(state.observe("2", 6));
        assert!(!state.observe("2", 6));
    }

    #[test]
    fn test_render_header_and_messages() {
        let conversations = builtin_conversations();
        let mut terminal = Terminal::new(TestBackend::new(70, 40)).unwrap();
        let mut state = ConversationViewState::new();
        let mut composer = Composer::new();

        draw(&mut terminal, &mut state, &mut composer, Some(&conversations[1]));

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Jamal Carter"));
        assert!(text.contains("+1 (737) 555-8832"));
        assert!(text.contains("Active 5m ago"));
        assert!(text.contains("Ctrl+T Call"));
        assert!(text.contains("Write a message"));
        assert_eq!(state.last_rendered, Some(("2".to_string(), 3)));
    }

    #[test]
    fn test_render_without_conversation() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut state = ConversationViewState::new();
        let mut composer = Composer::new();
        draw(&mut terminal, &mut state, &mut composer, None);
        assert!(buffer_text(terminal.backend().buffer()).contains("No conversation selected."));
    }

    #[test]
    fn test_auto_scroll_only_on_change() {
        let mut conversations = builtin_conversations();
        let mut terminal = Terminal::new(TestBackend::new(50, 14)).unwrap();
        let mut state = ConversationViewState::new();
        let mut composer = Composer::new();

        draw(&mut terminal, &mut state, &mut composer, Some(&conversations[0]));
        let pinned = state.scroll_state.offset().y;
        assert!(pinned > 0, "overflowing history should start at the end");

        // Manual scroll survives a redraw with the same content
        state.handle_event(&TuiEvent::ScrollPageUp);
        draw(&mut terminal, &mut state, &mut composer, Some(&conversations[0]));
        let scrolled = state.scroll_state.offset().y;
        assert!(scrolled < pinned);

        // A new message re-pins to the end
        conversations[0].messages.push(Message {
            id: "6".to_string(),
            author: Author::Me,
            text: "Thanks, I'll chase QA.".to_string(),
            time: "09:30".to_string(),
        });
        draw(&mut terminal, &mut state, &mut composer, Some(&conversations[0]));
        assert!(state.scroll_state.offset().y > scrolled);
        assert!(buffer_text(terminal.backend().buffer()).contains("chase QA"));
    }
}
