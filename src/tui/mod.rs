//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Modal overlays capture input first, in stacking order:
//!
//! 1. Dial pad (when open)
//! 2. Call card (when a call is active)
//! 3. Global shortcuts (panel switching, Ctrl+T, Ctrl+P, mouse)
//! 4. The active panel's component
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after at least one event arrived. All pending events are drained
//! before the next draw.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::model::Panel;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CallEvent, CallOverlayState, ChatListEvent, ChatListState, Composer, ComposerEvent,
    ConversationViewState, DialpadEvent, DialpadState, PanelTabsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub tabs: PanelTabsState,
    pub chat_list: ChatListState,
    pub conversation: ConversationViewState,
    pub composer: Composer,
    pub call: CallOverlayState,
    pub dialpad: DialpadState,
    /// Panels drawn in the last frame and where
    pub panel_areas: Vec<(Panel, Rect)>,
    // Props from config
    pub user_name: String,
    pub user_initials: String,
    pub wide_layout_min_width: u16,
}

impl TuiState {
    pub fn new(
        app: &App,
        user_name: &str,
        user_initials: &str,
        wide_layout_min_width: u16,
    ) -> Self {
        let mut chat_list = ChatListState::new();
        chat_list.highlight(app.selected_index());
        Self {
            tabs: PanelTabsState::default(),
            chat_list,
            conversation: ConversationViewState::new(),
            composer: Composer::new(),
            call: CallOverlayState::default(),
            dialpad: DialpadState::default(),
            panel_areas: Vec::new(),
            user_name: user_name.to_string(),
            user_initials: user_initials.to_string(),
            wide_layout_min_width,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(
        &app,
        &config.user_name,
        &config.user_initials,
        config.wide_layout_min_width,
    );

    let mut terminal = ratatui::init();
    let result = (|| -> std::io::Result<()> {
        let _terminal_mode_guard = TerminalModeGuard::new()?;
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Process first event + drain ALL pending events before next draw
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
        }
    })();

    ratatui::restore();
    result
}

/// Route one terminal event through overlays, global shortcuts and the
/// active panel, applying the resulting action.
///
/// Events are drained in batches between draws, so the composer is re-synced
/// with `App::draft` here rather than only when rendering.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = route_event(app, tui, event);
    tui.composer.sync(&app.draft);
    effect
}

fn route_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    // Dial pad captures everything while open
    if app.dialpad.is_open {
        let Some(dialpad_event) = tui.dialpad.handle_event(&event) else {
            return Effect::None;
        };
        let action = match dialpad_event {
            DialpadEvent::Append(c) => Action::AppendDigit(c),
            DialpadEvent::Delete => Action::DeleteLastDigit,
            DialpadEvent::Clear => Action::ClearDigits,
            DialpadEvent::Dial => Action::Dial,
            DialpadEvent::Close => Action::CloseDialpad,
        };
        return update(app, action);
    }

    // Then the call card
    if app.call_target.is_some() {
        return match tui.call.handle_event(&event) {
            Some(CallEvent::Hangup) => update(app, Action::EndCall),
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::NextPanel => {
            let next = app.active_panel.next();
            update(app, Action::SetActivePanel(next))
        }
        TuiEvent::PrevPanel => {
            let prev = app.active_panel.prev();
            update(app, Action::SetActivePanel(prev))
        }
        TuiEvent::ShowPanel(panel) => update(app, Action::SetActivePanel(panel)),
        TuiEvent::StartCall => update(app, Action::StartCall),
        TuiEvent::OpenDialpad => update(app, Action::OpenDialpad),
        TuiEvent::MouseClick(column, row) => handle_click(app, tui, column, row),
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.conversation.handle_event(&event);
            Effect::None
        }
        _ => handle_panel_event(app, tui, event),
    }
}

fn handle_panel_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match app.active_panel {
        Panel::Chats => match tui.chat_list.handle_event(&event) {
            Some(ChatListEvent::Select(index)) => select_index(app, tui, index),
            Some(ChatListEvent::OpenDialpad) => update(app, Action::OpenDialpad),
            None => Effect::None,
        },
        Panel::Conversation => {
            if tui.conversation.handle_event(&event).is_some() {
                return Effect::None;
            }
            match tui.composer.handle_event(&event) {
                Some(ComposerEvent::DraftChanged(text)) => update(app, Action::UpdateDraft(text)),
                Some(ComposerEvent::Submit) => update(app, Action::SendMessage),
                None => Effect::None,
            }
        }
        Panel::Details => Effect::None,
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    if let Some(panel) = tui.tabs.hit_test(column, row) {
        return update(app, Action::SetActivePanel(panel));
    }

    let panel = ui::hit_test_panel(&tui.panel_areas, column, row);
    if panel == Some(Panel::Chats)
        && let Some(index) = tui.chat_list.hit_test(column, row)
    {
        return select_index(app, tui, index);
    }

    match panel {
        Some(panel) if panel != app.active_panel => update(app, Action::SetActivePanel(panel)),
        _ => Effect::None,
    }
}

fn select_index(app: &mut App, tui: &mut TuiState, index: usize) -> Effect {
    let Some(id) = app.conversations.get(index).map(|c| c.id.clone()) else {
        return Effect::None;
    };
    let effect = update(app, Action::SelectConversation(id));
    tui.chat_list.highlight(app.selected_index());
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn setup() -> (App, TuiState) {
        let app = test_app();
        let tui = TuiState::new(&app, "Jordan Doe", "JD", 110);
        (app, tui)
    }

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_force_quit() {
        let (mut app, mut tui) = setup();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_type_and_send_via_enter() {
        let (mut app, mut tui) = setup();
        let before = app.selected().unwrap().messages.len();

        type_str(&mut app, &mut tui, "hi");
        assert_eq!(app.draft, "hi");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        let selected = app.selected().unwrap();
        assert_eq!(selected.messages.len(), before + 1);
        assert_eq!(selected.last_message, "hi");
        assert!(app.draft.is_empty());
    }

    #[test]
    fn test_enter_on_blank_draft_sends_nothing() {
        let (mut app, mut tui) = setup();
        let before = app.conversations.clone();
        type_str(&mut app, &mut tui, "   ");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.conversations, before);
    }

    #[test]
    fn test_typing_after_send_without_redraw_starts_fresh_draft() {
        let (mut app, mut tui) = setup();
        type_str(&mut app, &mut tui, "hi");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        type_str(&mut app, &mut tui, "x");

        assert_eq!(app.draft, "x");
        assert_eq!(app.selected().unwrap().last_message, "hi");
        assert_eq!(tui.composer.buffer, "x");
    }

    #[test]
    fn test_typing_after_select_without_redraw_drops_old_draft() {
        let (mut app, mut tui) = setup();
        tui.chat_list.len = app.conversations.len();
        type_str(&mut app, &mut tui, "secret");

        handle_event(&mut app, &mut tui, TuiEvent::ShowPanel(Panel::Chats));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        type_str(&mut app, &mut tui, "!");

        assert_eq!(app.selected().unwrap().id, "2");
        assert_eq!(app.draft, "!");
    }

    #[test]
    fn test_chat_list_select_with_keyboard() {
        let (mut app, mut tui) = setup();
        tui.chat_list.len = app.conversations.len();
        handle_event(&mut app, &mut tui, TuiEvent::ShowPanel(Panel::Chats));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert_eq!(app.selected().unwrap().id, "3");
        assert_eq!(app.active_panel, Panel::Conversation);
        assert_eq!(tui.chat_list.highlighted(), Some(2));
    }

    #[test]
    fn test_panel_cycling() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::NextPanel);
        assert_eq!(app.active_panel, Panel::Details);
        handle_event(&mut app, &mut tui, TuiEvent::NextPanel);
        assert_eq!(app.active_panel, Panel::Chats);
        handle_event(&mut app, &mut tui, TuiEvent::PrevPanel);
        assert_eq!(app.active_panel, Panel::Details);
    }

    #[test]
    fn test_dialpad_captures_input() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::OpenDialpad);
        type_str(&mut app, &mut tui, "12x");
        assert_eq!(app.dialpad.buffer(), "12");
        assert!(app.draft.is_empty());

        handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        assert_eq!(app.dialpad.buffer(), "1");
        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!app.dialpad.is_open);
        assert_eq!(app.dialpad.buffer(), "1");
    }

    #[test]
    fn test_dial_then_hang_up() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::OpenDialpad);
        type_str(&mut app, &mut tui, "555");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert_eq!(app.call_target.as_ref().unwrap().label, "555");
        assert!(!app.dialpad.is_open);

        // Call card swallows typing
        type_str(&mut app, &mut tui, "hi");
        assert!(app.draft.is_empty());

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(app.call_target.is_none());
    }

    #[test]
    fn test_start_call_shortcut() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::StartCall);
        assert_eq!(app.call_target.as_ref().unwrap().label, "Amina Blake");
    }

    #[test]
    fn test_details_panel_ignores_typing() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::ShowPanel(Panel::Details));
        type_str(&mut app, &mut tui, "abc");
        assert!(app.draft.is_empty());
    }

    #[test]
    fn test_click_tab_and_chat_row() {
        let (mut app, mut tui) = setup();
        tui.tabs.tab_areas = vec![(Panel::Chats, Rect::new(0, 1, 10, 1))];
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(3, 1));
        assert_eq!(app.active_panel, Panel::Chats);

        tui.panel_areas = vec![(Panel::Chats, Rect::new(0, 2, 40, 20))];
        tui.chat_list.inner_area = Rect::new(2, 3, 36, 18);
        tui.chat_list.len = app.conversations.len();
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(5, 3 + 3));

        assert_eq!(app.selected().unwrap().id, "2");
        assert_eq!(app.active_panel, Panel::Conversation);
    }
}
