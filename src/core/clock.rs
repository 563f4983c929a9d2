//! Wall-clock access for message timestamps.
//!
//! `App` never calls `Local::now()` directly; it asks its `Clock`. Tests and
//! snapshot renders swap in a `FixedClock`.

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// How message time labels are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ClockFormat {
    /// "14:05"
    #[default]
    #[serde(rename = "24h")]
    #[value(name = "24h")]
    TwentyFourHour,
    /// "02:05 PM"
    #[serde(rename = "12h")]
    #[value(name = "12h")]
    TwelveHour,
}

impl ClockFormat {
    pub fn label(self, at: &DateTime<Local>) -> String {
        match self {
            ClockFormat::TwentyFourHour => at.format("%H:%M").to_string(),
            ClockFormat::TwelveHour => at.format("%I:%M %p").to_string(),
        }
    }
}
