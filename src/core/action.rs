//! # Actions
//!
//! Everything that can happen in the messenger becomes an `Action`.
//! User presses Enter in the composer? That's `Action::SendMessage`.
//! User clicks a keypad cell? That's `Action::AppendDigit(c)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every action is logged, so a session can be reconstructed from the log.

use log::debug;

use crate::core::model::Panel;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectConversation(String),
    UpdateDraft(String),
    SendMessage,
    SetActivePanel(Panel),
    StartCall,
    EndCall,
    OpenDialpad,
    CloseDialpad,
    AppendDigit(char),
    DeleteLastDigit,
    ClearDigits,
    Dial,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::SelectConversation(id) => app.select_conversation(&id),
        Action::UpdateDraft(text) => app.update_draft(text),
        Action::SendMessage => {
            app.send_message();
        }
        Action::SetActivePanel(panel) => app.set_active_panel(panel),
        Action::StartCall => app.start_call(),
        Action::EndCall => app.end_call(),
        Action::OpenDialpad => app.open_dialpad(),
        Action::CloseDialpad => app.close_dialpad(),
        Action::AppendDigit(c) => app.append_digit(c),
        Action::DeleteLastDigit => app.delete_last_digit(),
        Action::ClearDigits => app.clear_digits(),
        Action::Dial => app.dial(),
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
