//! # Core Application Logic
//!
//! This module contains the messenger's state model.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (all state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! `config` and `seed` are the exception: they read files at startup, before
//! the state exists.
//!
//! ## Modules
//!
//! - [`model`]: Conversations, messages, panels, call targets
//! - [`state`]: The `App` struct and its operations
//! - [`action`]: The `Action` enum and `update()`
//! - [`dialpad`]: Bounded dial buffer
//! - [`clock`]: Time source and label format
//! - [`seed`]: Built-in conversation table and seed file loader
//! - [`config`]: `~/.systemic/config.toml`

pub mod action;
pub mod clock;
pub mod config;
pub mod dialpad;
pub mod model;
pub mod seed;
pub mod state;
