//! # Application State
//!
//! Everything the messenger knows lives in `App`. No TUI types here; the
//! presentation layer only reads this struct and dispatches actions.
//!
//! ```text
//! App
//! ├── conversations: Vec<Conversation>  // conversation store
//! ├── selected_id: Option<String>       // None only when the store is empty
//! ├── active_panel: Panel               // chats | conversation | details
//! ├── draft: String                     // composer text, verbatim
//! ├── call_target: Option<CallTarget>   // at most one simulated call
//! ├── dialpad: DialPad                  // visibility + bounded buffer
//! ├── clock: Box<dyn Clock>             // source of "now" for sends
//! └── clock_format: ClockFormat         // 24h / 12h labels
//! ```
//!
//! State changes only happen through the operations below, normally reached
//! via `update(state, action)` in action.rs. Every operation is total: guard
//! clauses no-op instead of failing.

use log::{debug, info};

use crate::core::clock::{Clock, ClockFormat, SystemClock};
use crate::core::dialpad::DialPad;
use crate::core::model::{Author, CallTarget, Conversation, Message, Panel, resolve};

pub struct App {
    pub conversations: Vec<Conversation>,
    pub selected_id: Option<String>,
    pub active_panel: Panel,
    pub draft: String,
    pub call_target: Option<CallTarget>,
    pub dialpad: DialPad,
    pub clock: Box<dyn Clock>,
    pub clock_format: ClockFormat,
}

impl App {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        let selected_id = conversations.first().map(|c| c.id.clone());
        Self {
            conversations,
            selected_id,
            active_panel: Panel::default(),
            draft: String::new(),
            call_target: None,
            dialpad: DialPad::new(),
            clock: Box::new(SystemClock),
            clock_format: ClockFormat::default(),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>, format: ClockFormat) -> Self {
        self.clock = clock;
        self.clock_format = format;
        self
    }

    /// The conversation currently on screen, with stale-id fallback.
    pub fn selected(&self) -> Option<&Conversation> {
        resolve(self.selected_id.as_deref(), &self.conversations)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected()?;
        self.conversations.iter().position(|c| c.id == selected.id)
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Selection + navigation
    // ------------------------------------------------------------------

    pub fn select_conversation(&mut self, id: &str) {
        if self.conversation(id).is_none() {
            debug!("Selecting unknown conversation id '{}', will resolve to first", id);
        }
        self.selected_id = Some(id.to_string());
        self.active_panel = Panel::Conversation;
        self.draft.clear();
    }

    pub fn set_active_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    // ------------------------------------------------------------------
    // Composer
    // ------------------------------------------------------------------

    pub fn update_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Send the draft to the selected conversation.
    ///
    /// Returns the id of the appended message, or `None` when the draft is
    /// blank or nothing is selected.
    pub fn send_message(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        let target_id = self.selected()?.id.clone();

        let now = self.clock.now();
        let time = self.clock_format.label(&now);
        let base_id = format!("{}-{}", target_id, now.timestamp_millis());

        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == target_id)?;

        let id = unique_message_id(conversation, base_id);
        conversation.messages.push(Message {
            id: id.clone(),
            author: Author::Me,
            text: text.clone(),
            time: time.clone(),
        });
        conversation.last_message = text;
        conversation.time = time;
        conversation.unread = 0;

        info!(
            "Sent message {} to conversation {} ({} messages)",
            id,
            target_id,
            conversation.messages.len()
        );

        self.draft.clear();
        self.active_panel = Panel::Conversation;
        Some(id)
    }

    // ------------------------------------------------------------------
    // Calls
    // ------------------------------------------------------------------

    pub fn start_call(&mut self) {
        let Some(conversation) = self.selected() else {
            return;
        };
        let target = CallTarget::for_conversation(conversation);
        info!("Starting call with {}", target.label);
        self.call_target = Some(target);
    }

    pub fn end_call(&mut self) {
        if let Some(target) = self.call_target.take() {
            info!("Ended call with {}", target.label);
        }
    }

    // ------------------------------------------------------------------
    // Dial pad
    // ------------------------------------------------------------------

    pub fn open_dialpad(&mut self) {
        self.dialpad.open();
    }

    pub fn close_dialpad(&mut self) {
        self.dialpad.close();
    }

    pub fn append_digit(&mut self, digit: char) {
        if !self.dialpad.push(digit) {
            debug!("Dial buffer full, dropped '{}'", digit);
        }
    }

    pub fn delete_last_digit(&mut self) {
        self.dialpad.pop();
    }

    pub fn clear_digits(&mut self) {
        self.dialpad.clear();
    }

    pub fn dial(&mut self) {
        let Some(number) = self.dialpad.take_number() else {
            return;
        };
        info!("Direct dial to {}", number);
        self.call_target = Some(CallTarget::direct_dial(&number));
        self.dialpad.close();
    }
}

/// Keep `base` if unused in the conversation, else append `-2`, `-3`, ...
fn unique_message_id(conversation: &Conversation, base: String) -> String {
    if !conversation.has_message(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !conversation.has_message(candidate))
        .unwrap_or(base)
}
