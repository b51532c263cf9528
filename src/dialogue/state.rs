use serde::{Deserialize, Serialize};
use std::fmt;

/// How a conversation is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    /// Welcome, then the learn/book main menu.
    Menu,
    /// Welcome, then straight to the topic list.
    Learning,
}

/// One stage of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Concern,
    Duration,
    Mode,
    Name,
    Phone,
    PreferredTime,
}

impl BookingStep {
    /// Every step in form order. `Phone` is skipped when phone collection is disabled.
    pub const SEQUENCE: [BookingStep; 6] = [
        BookingStep::Concern,
        BookingStep::Duration,
        BookingStep::Mode,
        BookingStep::Name,
        BookingStep::Phone,
        BookingStep::PreferredTime,
    ];
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Concern => "concern",
            Self::Duration => "duration",
            Self::Mode => "mode",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::PreferredTime => "preferred_time",
        };
        write!(f, "{s}")
    }
}

/// Where the conversation currently is. Exactly one state is active per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    Menu,
    Learning,
    Booking(BookingStep),
    Done,
}

impl DialogueState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Learning => write!(f, "learning"),
            Self::Booking(step) => write!(f, "booking({step})"),
            Self::Done => write!(f, "done"),
        }
    }
}
