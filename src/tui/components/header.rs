//! # Header Component
//!
//! Single-line brand bar: product name and tagline on the left, the local
//! user's name and avatar on the right.
//!
//! ## Stateless Component
//!
//! The header is purely presentational. It receives its props as struct
//! fields and owns no state, so it can be built fresh every frame:
//!
//! ```rust,ignore
//! let mut header = Header::new(&config.user_name, &config.user_initials);
//! header.render(frame, header_area);
//! ```
//!
//! On narrow terminals the tagline is dropped first, then the user name; the
//! brand and avatar always stay visible.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const BRAND: &str = "Systemic Messenger";
pub const TAGLINE: &str = "Stay in sync across teams, instantly.";

pub struct Header<'a> {
    /// Local user's display name (e.g. "Jordan Doe")
    pub user_name: &'a str,
    /// Local user's avatar label (e.g. "JD")
    pub user_initials: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(user_name: &'a str, user_initials: &'a str) -> Self {
        Self {
            user_name,
            user_initials,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let avatar = format!("[{}]", self.user_initials);
        let avatar_width = avatar.width() + 1;
        let name_width = self.user_name.width() + 1;
        // "◆ " + brand must always fit beside the right-hand side
        let brand_width = BRAND.width() + 2;
        let show_name = area.width as usize >= brand_width + name_width + avatar_width;
        let right_width = if show_name {
            name_width + avatar_width
        } else {
            avatar_width
        };

        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right_width as u16),
        ])
        .areas(area);

        let brand_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(format!("◆ {BRAND}"), brand_style)];

        // Room for "◆ " + brand + two-space gap + tagline
        let full_width = BRAND.chars().count() + TAGLINE.chars().count() + 4;
        if left.width as usize >= full_width {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Line::from(spans), left);

        let mut user = Vec::new();
        if show_name {
            user.push(Span::styled(
                format!("{} ", self.user_name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        user.push(Span::styled(
            avatar,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        frame.render_widget(Paragraph::new(Line::from(user)).right_aligned(), right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Header::new("Jordan Doe", "JD").render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_header_wide_shows_tagline() {
        let text = render(100);
        assert!(text.contains(BRAND));
        assert!(text.contains("Stay in sync"));
        assert!(text.contains("Jordan Doe [JD]"));
    }

    #[test]
    fn test_header_medium_keeps_name_drops_tagline() {
        let text = render(50);
        assert!(!text.contains("Stay in sync"));
        assert!(text.contains("Jordan Doe"));
    }

    #[test]
    fn test_header_narrow_drops_tagline() {
        let text = render(30);
        assert!(text.contains("Systemic"));
        assert!(!text.contains("Stay in sync"));
        assert!(!text.contains("Jordan Doe"));
        assert!(text.contains("[JD]"));
    }
}
