//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{Local, TimeZone};

use crate::core::clock::{ClockFormat, FixedClock};
use crate::core::seed::builtin_conversations;
use crate::core::state::App;

/// Label produced by the frozen clock in 24h format.
pub const FROZEN_LABEL: &str = "10:42";

/// Creates a test App over the built-in seed with a frozen clock.
pub fn test_app() -> App {
    let frozen = Local
        .with_ymd_and_hms(2024, 5, 14, 10, 42, 0)
        .single()
        .expect("unambiguous local time");
    App::new(builtin_conversations())
        .with_clock(Box::new(FixedClock(frozen)), ClockFormat::TwentyFourHour)
}

/// Flatten a TestBackend buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
