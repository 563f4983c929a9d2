use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::model::{Author, Message};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Bubbles never take more than this share of the row.
const MAX_WIDTH_PERCENT: u16 = 75;
/// Blank line between consecutive bubbles.
pub const BUBBLE_GAP: u16 = 1;

/// A chat bubble for one message.
///
/// # Design
///
/// `Bubble` is a **transient component**: it's created fresh each frame from
/// the message it shows and holds no state.
///
/// Own messages are cyan and hug the right edge; the counterpart's are green
/// and hug the left edge. The time label sits in the bottom border.
///
/// # Height Calculation
///
/// The text is wrapped with `textwrap` before it reaches the `Paragraph`, so
/// the height reported by [`Bubble::layout`] is exactly what gets drawn.
/// The parent `ConversationView` relies on that to size its scroll canvas.
#[derive(Clone, Copy)]
pub struct Bubble<'a> {
    pub message: &'a Message,
}

/// Where a bubble sits within its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleLayout {
    pub x_offset: u16,
    pub width: u16,
    pub height: u16,
    pub lines: Vec<String>,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    pub fn is_mine(&self) -> bool {
        self.message.author == Author::Me
    }

    /// Compute width, height, offset and wrapped lines for a row `row_width` wide.
    pub fn layout(&self, row_width: u16) -> BubbleLayout {
        let max_width = (row_width.saturating_mul(MAX_WIDTH_PERCENT) / 100)
            .max(HORIZONTAL_OVERHEAD + 1)
            .min(row_width);
        let max_text = max_width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;

        let lines: Vec<String> = textwrap::wrap(&self.message.text, max_text)
            .into_iter()
            .map(|l| l.into_owned())
            .collect();

        let longest = lines
            .iter()
            .map(|l| unicode_width::UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0) as u16;
        // Leave room for the time label in the bottom border
        let time_width = self.message.time.chars().count() as u16 + 2;
        let width = (longest + HORIZONTAL_OVERHEAD)
            .max(time_width + 2)
            .min(max_width);

        let x_offset = if self.is_mine() {
            row_width.saturating_sub(width)
        } else {
            0
        };

        BubbleLayout {
            x_offset,
            width,
            height: lines.len().max(1) as u16 + VERTICAL_OVERHEAD,
            lines,
        }
    }
}

impl Widget for Bubble<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area.width);
        let rect = Rect::new(
            area.x + layout.x_offset,
            area.y,
            layout.width,
            layout.height.min(area.height),
        );

        let color = if self.is_mine() {
            Color::Cyan
        } else {
            Color::Green
        };
        let time = Line::from(format!(" {} ", self.message.time)).style(Style::default().fg(Color::DarkGray));
        let time = if self.is_mine() { time.right_aligned() } else { time.left_aligned() };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title_bottom(time)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let lines: Vec<Line> = layout.lines.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .style(Style::default().fg(color))
            .block(block)
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(author: Author, text: &str) -> Message {
        Message {
            id: "m".to_string(),
            author,
            text: text.to_string(),
            time: "09:18".to_string(),
        }
    }

    #[test]
    fn test_single_line_height_includes_borders() {
        let msg = message(Author::Them, "Short");
        let layout = Bubble::new(&msg).layout(80);
        assert_eq!(layout.height, 3);
        assert_eq!(layout.x_offset, 0);
    }

    #[test]
    fn test_own_bubble_is_right_aligned() {
        let msg = message(Author::Me, "Short");
        let layout = Bubble::new(&msg).layout(80);
        assert_eq!(layout.x_offset + layout.width, 80);
    }

    #[test]
    fn test_long_text_wraps_within_max_width() {
        let msg = message(
            Author::Them,
            "Just QA sign-off on the billing flow. I pinged the team already.",
        );
        let layout = Bubble::new(&msg).layout(40);
        assert!(layout.width <= 30);
        assert!(layout.lines.len() > 1);
        assert_eq!(layout.height, layout.lines.len() as u16 + 2);
    }

    #[test]
    fn test_tiny_row_does_not_panic() {
        let msg = message(Author::Me, "hello there");
        let layout = Bubble::new(&msg).layout(3);
        assert!(layout.width <= 3);
        assert!(layout.height >= 3);
    }

    #[test]
    fn test_render_into_buffer() {
        let msg = message(Author::Me, "hi");
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        Bubble::new(&msg).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("hi"));
        assert!(text.contains("09:18"));
    }
}
