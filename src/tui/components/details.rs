//! Contact card for the selected conversation: identity, topics, location.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::model::Conversation;
use crate::tui::component::Component;

pub struct DetailsPanel<'a> {
    pub conversation: Option<&'a Conversation>,
    pub focused: bool,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(conversation: Option<&'a Conversation>, focused: bool) -> Self {
        Self {
            conversation,
            focused,
        }
    }
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_uppercase(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))
}

impl Component for DetailsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Details ")
            .padding(Padding::horizontal(1));

        let Some(c) = self.conversation else {
            frame.render_widget(Paragraph::new("").block(block), area);
            return;
        };

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", c.avatar),
                    Style::default().fg(Color::Black).bg(Color::Gray),
                ),
                Span::raw(" "),
                Span::styled(c.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(c.virtual_number.clone(), dim)),
            Line::from(c.role.clone()),
            Line::from(Span::styled(c.status.clone(), Style::default().fg(Color::Green))),
            Line::default(),
            section_title("Topics"),
        ];
        lines.extend(c.topics.iter().map(|topic| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Cyan)),
                Span::raw(topic.clone()),
            ])
        }));
        lines.push(Line::default());
        lines.push(section_title("Location"));
        lines.push(Line::from(c.location.clone()));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::builtin_conversations;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_details_shows_contact_card() {
        let conversations = builtin_conversations();
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal
            .draw(|f| {
                DetailsPanel::new(Some(&conversations[2]), false).render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Selena Wu"));
        assert!(text.contains("Design Director"));
        assert!(text.contains("TOPICS"));
        assert!(text.contains("Prototype"));
        assert!(text.contains("Singapore"));
    }
}
