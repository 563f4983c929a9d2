//! # Panel Tabs
//!
//! The Chats | Conversation | Details segmented control. Records each tab's
//! rectangle while rendering so mouse clicks can be mapped back to a panel.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::model::Panel;
use crate::tui::component::Component;

/// Hit areas from the last render.
#[derive(Debug, Default, Clone)]
pub struct PanelTabsState {
    pub tab_areas: Vec<(Panel, Rect)>,
}

impl PanelTabsState {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Panel> {
        self.tab_areas
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(panel, _)| *panel)
    }
}

pub struct PanelTabs<'a> {
    pub state: &'a mut PanelTabsState,
    pub active: Panel,
}

impl<'a> PanelTabs<'a> {
    pub fn new(state: &'a mut PanelTabsState, active: Panel) -> Self {
        Self { state, active }
    }
}

impl Component for PanelTabs<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.tab_areas.clear();

        let mut x = area.x;
        for (i, panel) in Panel::ALL.into_iter().enumerate() {
            let label = format!(" F{} {} ", i + 1, panel.label());
            let width = (label.chars().count() as u16).min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }

            let style = if panel == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Span::styled(label, style), rect);
            self.state.tab_areas.push((panel, rect));
            x = x.saturating_add(width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_tabs_render_all_labels() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PanelTabsState::default();
        terminal
            .draw(|f| {
                PanelTabs::new(&mut state, Panel::Details).render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Chats"));
        assert!(text.contains("Conversation"));
        assert!(text.contains("Details"));
        assert_eq!(state.tab_areas.len(), 3);
    }

    #[test]
    fn test_tab_hit_test() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PanelTabsState::default();
        terminal
            .draw(|f| {
                PanelTabs::new(&mut state, Panel::Chats).render(f, f.area());
            })
            .unwrap();

        // " F1 Chats " spans columns 0..10
        assert_eq!(state.hit_test(2, 0), Some(Panel::Chats));
        let (_, conversation) = state.tab_areas[1];
        assert_eq!(
            state.hit_test(conversation.x + 1, 0),
            Some(Panel::Conversation)
        );
        assert_eq!(state.hit_test(59, 0), None);
        assert_eq!(state.hit_test(2, 3), None);
    }
}
