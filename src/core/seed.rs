//! # Seed Data
//!
//! The conversation table every session starts from. The built-in table is
//! used unless a TOML seed file is configured; a file that fails to load or
//! validate is reported as a `SeedError` so the caller can fall back.

use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::model::{Author, Conversation, Message};

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    DuplicateConversation(String),
    DuplicateMessage { conversation: String, message: String },
    EmptyText { conversation: String, message: String },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "seed I/O error: {e}"),
            SeedError::Parse(e) => write!(f, "seed parse error: {e}"),
            SeedError::DuplicateConversation(id) => {
                write!(f, "duplicate conversation id '{id}'")
            }
            SeedError::DuplicateMessage {
                conversation,
                message,
            } => write!(
                f,
                "duplicate message id '{message}' in conversation '{conversation}'"
            ),
            SeedError::EmptyText {
                conversation,
                message,
            } => write!(
                f,
                "message '{message}' in conversation '{conversation}' has blank text"
            ),
        }
    }
}

impl std::error::Error for SeedError {}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    conversations: Vec<Conversation>,
}

/// Load and validate a seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<Conversation>, SeedError> {
    let contents = fs::read_to_string(path).map_err(SeedError::Io)?;
    let conversations = parse_seed(&contents)?;
    info!(
        "Loaded {} conversations from {}",
        conversations.len(),
        path.display()
    );
    Ok(conversations)
}

/// Parse seed TOML and check the store invariants.
pub fn parse_seed(contents: &str) -> Result<Vec<Conversation>, SeedError> {
    let seed: SeedFile = toml::from_str(contents).map_err(SeedError::Parse)?;
    validate(&seed.conversations)?;
    debug!("Seed validated: {} conversations", seed.conversations.len());
    Ok(seed.conversations)
}

fn validate(conversations: &[Conversation]) -> Result<(), SeedError> {
    let mut conversation_ids = HashSet::new();
    for conversation in conversations {
        if !conversation_ids.insert(conversation.id.as_str()) {
            return Err(SeedError::DuplicateConversation(conversation.id.clone()));
        }

        let mut message_ids = HashSet::new();
        for message in &conversation.messages {
            if !message_ids.insert(message.id.as_str()) {
                return Err(SeedError::DuplicateMessage {
                    conversation: conversation.id.clone(),
                    message: message.id.clone(),
                });
            }
            if message.author == Author::Me && message.text.trim().is_empty() {
                return Err(SeedError::EmptyText {
                    conversation: conversation.id.clone(),
                    message: message.id.clone(),
                });
            }
        }
    }
    Ok(())
}

fn msg(id: &str, author: Author, text: &str, time: &str) -> Message {
    Message {
        id: id.to_string(),
        author,
        text: text.to_string(),
        time: time.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed conversation table.
pub fn builtin_conversations() -> Vec<Conversation> {
    use Author::{Me, Them};

    vec![
        Conversation {
            id: "1".to_string(),
            name: "Amina Blake".to_string(),
            avatar: "AB".to_string(),
            status: "Active now".to_string(),
            last_message: "Let’s finalise the launch deck tonight.".to_string(),
            time: "2m".to_string(),
            unread: 2,
            role: "Product Lead · Launch Crew".to_string(),
            location: "San Francisco, USA".to_string(),
            virtual_number: "+1 (415) 555-2044".to_string(),
            topics: strings(&["Launch", "Deck review", "Blocking issues"]),
            messages: vec![
                msg("1", Them, "Hey! I merged the latest analytics dashboard update.", "09:18"),
                msg(
                    "2",
                    Me,
                    "Great! I’ll plug that into the slides so stakeholders see the new funnel.",
                    "09:21",
                ),
                msg("3", Them, "Perfect. Can you drop a note on the pricing slide too?", "09:23"),
                msg("4", Me, "On it. Anything else blocking the launch?", "09:24"),
                msg(
                    "5",
                    Them,
                    "Just QA sign-off on the billing flow. I pinged the team already.",
                    "09:25",
                ),
            ],
        },
        Conversation {
            id: "2".to_string(),
            name: "Jamal Carter".to_string(),
            avatar: "JC".to_string(),
            status: "Active 5m ago".to_string(),
            last_message: "Let me know once the API is patched.".to_string(),
            time: "12m".to_string(),
            unread: 0,
            role: "Engineering Manager · Core Platform".to_string(),
            location: "Austin, USA".to_string(),
            virtual_number: "+1 (737) 555-8832".to_string(),
            topics: strings(&["API upgrade", "Error handling", "Rollout plan"]),
            messages: vec![
                msg("1", Them, "Morning! The client logs are still showing stale tokens.", "08:32"),
                msg("2", Me, "Got it. I’ll rotate and redeploy in 20 minutes.", "08:34"),
                msg("3", Them, "Thanks. Ping me if you need a reviewer.", "08:35"),
            ],
        },
        Conversation {
            id: "3".to_string(),
            name: "Selena Wu".to_string(),
            avatar: "SW".to_string(),
            status: "Active 2h ago".to_string(),
            last_message: "Tomorrow’s sync is shifted to 10:00.".to_string(),
            time: "1h".to_string(),
            unread: 0,
            role: "Design Director · Experience".to_string(),
            location: "Singapore".to_string(),
            virtual_number: "+65 6900 1144".to_string(),
            topics: strings(&["Design sync", "Prototype", "Feedback"]),
            messages: vec![
                msg(
                    "1",
                    Them,
                    "Sharing the updated prototype in the design channel now.",
                    "06:52",
                ),
                msg("2", Me, "Looks sharp. I’ll collect feedback before our sync.", "06:55"),
                msg(
                    "3",
                    Them,
                    "Perfect. The motion study is in Figma if you have notes.",
                    "06:56",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let conversations = builtin_conversations();
        assert_eq!(conversations.len(), 3);
        assert!(validate(&conversations).is_ok());
        assert_eq!(conversations[0].unread, 2);
        assert_eq!(conversations[0].messages.len(), 5);
    }

    #[test]
    fn test_parse_sparse_seed() {
        let seed = r#"
[[conversations]]
id = "a"
name = "Ada"
avatar = "AL"
status = "Away"
last_message = "See you"
time = "3m"
role = "Engineer"
location = "London"
virtual_number = "+44 20 0000 0000"

[[conversations.messages]]
id = "1"
author = "them"
text = "See you"
time = "10:00"
"#;
        let conversations = parse_seed(seed).unwrap();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].unread, 0);
        assert!(conversations[0].topics.is_empty());
        assert_eq!(conversations[0].messages[0].author, Author::Them);
    }

    #[test]
    fn test_empty_seed_is_valid() {
        assert!(parse_seed("").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_conversation_rejected() {
        let mut conversations = builtin_conversations();
        conversations[1].id = "1".to_string();
        match validate(&conversations) {
            Err(SeedError::DuplicateConversation(id)) => assert_eq!(id, "1"),
            other => panic!("Expected DuplicateConversation, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_message_rejected() {
        let mut conversations = builtin_conversations();
        conversations[2].messages[1].id = "1".to_string();
        assert!(matches!(
            validate(&conversations),
            Err(SeedError::DuplicateMessage { .. })
        ));
    }

    #[test]
    fn test_blank_own_message_rejected() {
        let mut conversations = builtin_conversations();
        conversations[0].messages[1].text = "   ".to_string();
        assert!(matches!(
            validate(&conversations),
            Err(SeedError::EmptyText { .. })
        ));
    }

    #[test]
    fn test_malformed_seed_is_parse_error() {
        assert!(matches!(
            parse_seed("[[conversations]]\nid = 3"),
            Err(SeedError::Parse(_))
        ));
    }
}
