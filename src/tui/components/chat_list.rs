//! # Chat List Component
//!
//! The inbox: one three-line row per conversation.
//!
//! ```text
//!  AB  Amina Blake                 2m
//!      +1 (415) 555-2044
//!      Let’s finalise the launch…  ② Active now
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChatListState` lives in `TuiState` (keyboard highlight, list offset,
//!   last rendered area for hit testing)
//! - `ChatList` is created each frame with borrowed state and the
//!   conversations as props
//!
//! The keyboard highlight is independent of the app's selection; Enter turns
//! the highlight into a `ChatListEvent::Select`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};

use crate::core::model::Conversation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Lines per conversation row.
pub const ROW_HEIGHT: u16 = 3;
/// Width of the avatar column including its trailing gap.
const AVATAR_COLUMN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatListEvent {
    /// Select the conversation at this index.
    Select(usize),
    /// The inbox "Open Dial Pad" button.
    OpenDialpad,
}

#[derive(Debug, Default)]
pub struct ChatListState {
    pub list_state: ListState,
    /// Number of rows at last render (bounds the highlight)
    pub len: usize,
    /// Inner list area at last render
    pub inner_area: Rect,
}

impl ChatListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move the highlight to `index` (e.g. after the app's selection changed).
    pub fn highlight(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    /// Map a screen position to a row index.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.inner_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = ((row - self.inner_area.y) / ROW_HEIGHT) as usize + self.list_state.offset();
        (index < self.len).then_some(index)
    }
}

impl EventHandler for ChatListState {
    type Event = ChatListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ChatListEvent> {
        match event {
            TuiEvent::CursorUp => {
                if self.len > 0 {
                    let next = self.highlighted().map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(next));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    let next = self.highlighted().map_or(0, |i| (i + 1).min(self.len - 1));
                    self.list_state.select(Some(next));
                }
                None
            }
            TuiEvent::Submit => self
                .highlighted()
                .filter(|&i| i < self.len)
                .map(ChatListEvent::Select),
            TuiEvent::InputChar('d') => Some(ChatListEvent::OpenDialpad),
            _ => None,
        }
    }
}

pub struct ChatList<'a> {
    pub state: &'a mut ChatListState,
    pub conversations: &'a [Conversation],
    /// Id of the conversation shown in the conversation panel
    pub selected_id: Option<&'a str>,
    /// Whether this panel has keyboard focus
    pub focused: bool,
}

impl<'a> ChatList<'a> {
    pub fn new(
        state: &'a mut ChatListState,
        conversations: &'a [Conversation],
        selected_id: Option<&'a str>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            conversations,
            selected_id,
            focused,
        }
    }

    fn row(&self, conversation: &Conversation, width: usize) -> ListItem<'static> {
        let is_selected = self.selected_id == Some(conversation.id.as_str());
        let name_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let dim = Style::default().fg(Color::DarkGray);
        let text_width = width.saturating_sub(AVATAR_COLUMN);

        // Line 1: avatar, name, right-aligned time
        let time_width = conversation.time.chars().count();
        let name = truncate(&conversation.name, text_width.saturating_sub(time_width + 1));
        let gap = text_width.saturating_sub(name.chars().count() + time_width);
        let first = Line::from(vec![
            Span::styled(
                format!(" {:<2}  ", conversation.avatar),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
            Span::styled(name, name_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(conversation.time.clone(), dim),
        ]);

        // Line 2: virtual number
        let second = Line::from(vec![
            Span::raw(" ".repeat(AVATAR_COLUMN)),
            Span::styled(truncate(&conversation.virtual_number, text_width), dim),
        ]);

        // Line 3: preview, status, unread badge
        let badge = if conversation.unread > 0 {
            format!(" {} ", conversation.unread)
        } else {
            String::new()
        };
        let status = format!(" {}", conversation.status);
        let preview_width =
            text_width.saturating_sub(status.chars().count() + badge.chars().count() + 1);
        let preview = truncate(&conversation.last_message, preview_width);
        let pad = preview_width.saturating_sub(preview.chars().count());
        let third = Line::from(vec![
            Span::raw(" ".repeat(AVATAR_COLUMN)),
            Span::raw(preview),
            Span::raw(" ".repeat(pad)),
            Span::styled(status, Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(
                badge,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        ListItem::new(vec![first, second, third])
    }
}

impl Component for ChatList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Inbox ")
            .title_bottom(Line::from(" d Open Dial Pad ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        self.state.inner_area = inner;
        self.state.len = self.conversations.len();

        if self.conversations.is_empty() {
            self.state.list_state.select(None);
            let empty = Paragraph::new("No conversations.")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        if self.state.highlighted().is_none_or(|i| i >= self.state.len) {
            self.state.list_state.select(Some(0));
        }

        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .conversations
            .iter()
            .map(|c| self.row(c, width))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to `max_width` chars, adding "…" if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max_width - 1).collect();
        format!("{kept}…")
    }
}
