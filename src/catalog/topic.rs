use serde::{Deserialize, Serialize};
use std::fmt;

/// Control labels that may appear among authored follow-ups.
///
/// Anything that is not exactly one of these labels is treated as a topic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    StartBooking,
    AskAnotherQuestion,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::StartBooking, Action::AskAnotherQuestion];

    /// The button label shown for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Action::StartBooking => "Book a WhatsApp Call",
            Action::AskAnotherQuestion => "Ask another question",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved follow-up: either another topic or a control action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStep {
    Topic(String),
    Action(Action),
}

impl NextStep {
    /// Resolves an authored label by exact match against the action set.
    pub fn resolve(label: &str) -> Self {
        match Action::from_label(label) {
            Some(action) => NextStep::Action(action),
            None => NextStep::Topic(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NextStep::Topic(id) => id,
            NextStep::Action(action) => action.label(),
        }
    }
}

/// A single Q&A node in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// The question text, which is also the unique key.
    pub id: String,
    pub answer: String,
    pub follow_ups: Vec<NextStep>,
}

impl Topic {
    /// Follow-up labels in authored order, ready to be shown as choices.
    pub fn follow_up_labels(&self) -> Vec<String> {
        self.follow_ups
            .iter()
            .map(|step| step.label().to_string())
            .collect()
    }
}

/// Follow-ups used when a topic was authored without any.
pub(crate) fn default_follow_ups() -> Vec<NextStep> {
    vec![
        NextStep::Action(Action::AskAnotherQuestion),
        NextStep::Action(Action::StartBooking),
    ]
}
