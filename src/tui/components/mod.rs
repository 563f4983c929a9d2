//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`: Brand line and user avatar
//! - `Bubble`: A single chat message
//! - `DetailsPanel`: Contact card for the selected conversation
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent `*State` struct lives in `TuiState`; a transient wrapper is
//! built each frame around it. The state implements `EventHandler` and turns
//! `TuiEvent`s into component events, which the event loop maps to
//! `core::action::Action`s:
//! - `PanelTabs`: Chats | Conversation | Details selector
//! - `ChatList`: Inbox rows with keyboard highlight
//! - `ConversationView` + `Composer`: Message history and input
//! - `CallOverlay`: Simulated call card
//! - `Dialpad`: Keypad overlay
//!
//! ### Props-Based Data Flow
//!
//! Components receive app data as "props" (fields), never by reaching into
//! `App` themselves:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! DetailsPanel::new(app.selected(), focused).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! DetailsPanel::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Brand line)
//! ├── panel_tabs.rs    (Panel selector)
//! ├── chat_list.rs     (Inbox)
//! ├── conversation.rs  (History + composer host)
//! ├── message.rs       (Chat bubble)
//! ├── composer.rs      (Single-line input)
//! ├── details.rs       (Contact card)
//! ├── call_overlay.rs  (Call modal)
//! ├── dialpad.rs       (Keypad modal)
//! └── overlay.rs       (Centering helper)
//! ```

pub mod call_overlay;
pub mod chat_list;
pub mod composer;
pub mod conversation;
pub mod details;
pub mod dialpad;
pub mod header;
pub mod message;
pub mod overlay;
pub mod panel_tabs;

pub use call_overlay::{CallEvent, CallOverlay, CallOverlayState};
pub use chat_list::{ChatList, ChatListEvent, ChatListState};
pub use composer::{Composer, ComposerEvent};
pub use conversation::{ConversationView, ConversationViewState};
pub use details::DetailsPanel;
pub use dialpad::{Dialpad, DialpadEvent, DialpadState};
pub use header::Header;
pub use panel_tabs::{PanelTabs, PanelTabsState};
