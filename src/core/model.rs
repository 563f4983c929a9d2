//! # Domain Types
//!
//! Plain data for the messenger: conversations, their messages, the active
//! panel, and the transient call target.
//!
//! ```text
//! Conversation
//! ├── id, name, avatar, status       // identity + presence
//! ├── last_message, time, unread     // inbox row
//! ├── role, location, virtual_number // details panel
//! ├── topics: Vec<String>
//! └── messages: Vec<Message>         // append-only, insertion order wins
//! ```

use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    /// The local user.
    Me,
    /// The other side of the conversation.
    Them,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the owning conversation.
    pub id: String,
    pub author: Author,
    pub text: String,
    /// Display label only. Never used for ordering.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub status: String,
    pub last_message: String,
    pub time: String,
    #[serde(default)]
    pub unread: u32,
    pub role: String,
    pub location: String,
    pub virtual_number: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Conversation {
    pub fn has_message(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }
}

/// Which of the three panels is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    Chats,
    #[default]
    Conversation,
    Details,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Chats, Panel::Conversation, Panel::Details];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Chats => "Chats",
            Panel::Conversation => "Conversation",
            Panel::Details => "Details",
        }
    }

    /// Cycle forward: Chats → Conversation → Details → Chats.
    pub fn next(self) -> Self {
        match self {
            Panel::Chats => Panel::Conversation,
            Panel::Conversation => Panel::Details,
            Panel::Details => Panel::Chats,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Panel::Chats => Panel::Details,
            Panel::Conversation => Panel::Chats,
            Panel::Details => Panel::Conversation,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Panel::Chats => 0,
            Panel::Conversation => 1,
            Panel::Details => 2,
        }
    }
}

/// Placeholder glyph for calls without a contact avatar.
pub const DIRECT_DIAL_AVATAR: &str = "☎";
pub const DIRECT_DIAL_DETAIL: &str = "Direct dial";

/// Descriptor of the simulated outgoing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTarget {
    pub label: String,
    pub detail: Option<String>,
    pub avatar: Option<String>,
}

impl CallTarget {
    pub fn for_conversation(conversation: &Conversation) -> Self {
        Self {
            label: conversation.name.clone(),
            detail: Some(conversation.virtual_number.clone()),
            avatar: Some(conversation.avatar.clone()),
        }
    }

    pub fn direct_dial(number: &str) -> Self {
        Self {
            label: number.to_string(),
            detail: Some(DIRECT_DIAL_DETAIL.to_string()),
            avatar: Some(DIRECT_DIAL_AVATAR.to_string()),
        }
    }

    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DIRECT_DIAL_AVATAR)
    }
}

/// Resolve the selected conversation.
///
/// Returns the conversation whose id matches, falling back to the first
/// entry when the id is missing or stale, and `None` only for an empty list.
pub fn resolve<'a>(id: Option<&str>, list: &'a [Conversation]) -> Option<&'a Conversation> {
    id.and_then(|id| list.iter().find(|c| c.id == id))
        .or_else(|| list.first())
}
