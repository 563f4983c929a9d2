use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::model::Panel;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CallOverlay, ChatList, ConversationView, DetailsPanel, Dialpad, Header, PanelTabs,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    // Sync props from App
    tui.composer.sync(&app.draft);

    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [header_area, tabs_area, main_area, footer_area] = layout.areas(frame.area());

    Header::new(&tui.user_name, &tui.user_initials).render(frame, header_area);
    PanelTabs::new(&mut tui.tabs, app.active_panel).render(frame, tabs_area);

    tui.panel_areas = panel_areas(main_area, app.active_panel, tui.wide_layout_min_width);
    for (panel, area) in tui.panel_areas.clone() {
        draw_panel(frame, app, tui, panel, area);
    }

    frame.render_widget(
        Span::styled(footer_hint(app), Style::default().fg(Color::DarkGray)),
        footer_area,
    );

    // Overlays: the dial pad sits above the call card
    if let Some(target) = &app.call_target {
        CallOverlay::new(&mut tui.call, target).render(frame, main_area);
    }
    if app.dialpad.is_open {
        Dialpad::new(&mut tui.dialpad, app.dialpad.buffer()).render(frame, main_area);
    }
}

/// Which panels are visible and where. All three side by side on wide
/// terminals, otherwise only the active one.
pub fn panel_areas(main_area: Rect, active: Panel, wide_min_width: u16) -> Vec<(Panel, Rect)> {
    if main_area.width < wide_min_width {
        return vec![(active, main_area)];
    }
    let [chats, conversation, details] = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Min(0),
        Constraint::Percentage(26),
    ])
    .areas(main_area);
    vec![
        (Panel::Chats, chats),
        (Panel::Conversation, conversation),
        (Panel::Details, details),
    ]
}

/// Find the visible panel under a screen position.
pub fn hit_test_panel(panel_areas: &[(Panel, Rect)], column: u16, row: u16) -> Option<Panel> {
    panel_areas
        .iter()
        .find(|(_, area)| area.contains(Position::new(column, row)))
        .map(|(panel, _)| *panel)
}

fn draw_panel(frame: &mut Frame, app: &App, tui: &mut TuiState, panel: Panel, area: Rect) {
    let focused = panel == app.active_panel;
    match panel {
        Panel::Chats => {
            ChatList::new(
                &mut tui.chat_list,
                &app.conversations,
                app.selected().map(|c| c.id.as_str()),
                focused,
            )
            .render(frame, area);
        }
        Panel::Conversation => {
            ConversationView::new(
                &mut tui.conversation,
                &mut tui.composer,
                app.selected(),
                focused,
            )
            .render(frame, area);
        }
        Panel::Details => {
            DetailsPanel::new(app.selected(), focused).render(frame, area);
        }
    }
}

fn footer_hint(app: &App) -> &'static str {
    if app.dialpad.is_open {
        " 0-9 * # Digits · ⌫ Delete · Del Clear · Enter Dial · Esc Close"
    } else if app.call_target.is_some() {
        " Esc Hang up"
    } else {
        match app.active_panel {
            Panel::Chats => " ↑↓ Move · Enter Open · d Dial pad · Tab Panels · Ctrl+Q Quit",
            Panel::Conversation => {
                " Enter Send · ↑↓ Scroll · Ctrl+T Call · Ctrl+P Dial pad · Tab Panels · Ctrl+Q Quit"
            }
            Panel::Details => " Ctrl+T Call · Ctrl+P Dial pad · Tab Panels · Ctrl+Q Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_narrow_shows_active_panel_only() {
        let app = test_app();
        let mut tui = TuiState::new(&app, "Jordan Doe", "JD", 110);
        let text = render(&app, &mut tui, 80, 30);

        assert!(text.contains("Systemic Messenger"));
        assert!(text.contains("Amina Blake"));
        assert!(text.contains("Write a message"));
        assert!(!text.contains("Inbox"));
        assert_eq!(tui.panel_areas.len(), 1);
    }

    #[test]
    fn test_draw_ui_wide_shows_all_panels() {
        let app = test_app();
        let mut tui = TuiState::new(&app, "Jordan Doe", "JD", 110);
        let text = render(&app, &mut tui, 140, 30);

        assert!(text.contains("Inbox"));
        assert!(text.contains("Jamal Carter"));
        assert!(text.contains("TOPICS"));
        assert_eq!(tui.panel_areas.len(), 3);
    }

    #[test]
    fn test_draw_ui_overlays() {
        let mut app = test_app();
        update(&mut app, Action::StartCall);
        update(&mut app, Action::OpenDialpad);
        let mut tui = TuiState::new(&app, "Jordan Doe", "JD", 110);
        let text = render(&app, &mut tui, 100, 30);

        assert!(text.contains("Dial pad"));
        assert!(text.contains("Enter number"));
        assert!(tui.dialpad.key_areas.len() == 12);
    }

    #[test]
    fn test_draw_ui_empty_store() {
        let app = App::new(Vec::new());
        let mut tui = TuiState::new(&app, "Jordan Doe", "JD", 110);
        let text = render(&app, &mut tui, 140, 20);
        assert!(text.contains("No conversations."));
        assert!(text.contains("No conversation selected."));
    }

    #[test]
    fn test_panel_hit_test() {
        let areas = panel_areas(Rect::new(0, 2, 150, 20), Panel::Chats, 110);
        let (_, details) = areas[2];
        assert_eq!(hit_test_panel(&areas, 1, 3), Some(Panel::Chats));
        assert_eq!(
            hit_test_panel(&areas, details.x + 1, 3),
            Some(Panel::Details)
        );
        assert_eq!(hit_test_panel(&areas, 1, 0), None);
    }

    #[test]
    fn test_footer_follows_mode() {
        let mut app = test_app();
        assert!(footer_hint(&app).contains("Enter Send"));
        app.start_call();
        assert!(footer_hint(&app).contains("Hang up"));
        app.open_dialpad();
        assert!(footer_hint(&app).contains("Enter Dial"));
    }
}
