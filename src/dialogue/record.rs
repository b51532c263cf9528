use super::state::BookingStep;
use serde::{Deserialize, Serialize};

/// The booking details collected during one conversation.
///
/// Every field starts unset. The record is replaced wholesale at the start of each
/// conversation and survives the "learn more" loop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub concern: Option<String>,
    pub duration: Option<String>,
    pub mode: Option<String>,
    pub name: Option<String>,
    /// Normalized digits, only set when phone collection is enabled.
    pub phone: Option<String>,
    pub preferred_time: Option<String>,
    /// Topics answered during this conversation, in viewing order (may repeat).
    pub topics_viewed: Vec<String>,
}

impl IntakeRecord {
    pub fn field(&self, step: BookingStep) -> Option<&str> {
        let value = match step {
            BookingStep::Concern => &self.concern,
            BookingStep::Duration => &self.duration,
            BookingStep::Mode => &self.mode,
            BookingStep::Name => &self.name,
            BookingStep::Phone => &self.phone,
            BookingStep::PreferredTime => &self.preferred_time,
        };
        value.as_deref()
    }

    pub(crate) fn set(&mut self, step: BookingStep, value: String) {
        let slot = match step {
            BookingStep::Concern => &mut self.concern,
            BookingStep::Duration => &mut self.duration,
            BookingStep::Mode => &mut self.mode,
            BookingStep::Name => &mut self.name,
            BookingStep::Phone => &mut self.phone,
            BookingStep::PreferredTime => &mut self.preferred_time,
        };
        *slot = Some(value);
    }

    /// True when no booking field has been set and no topic viewed.
    pub fn is_empty(&self) -> bool {
        BookingStep::SEQUENCE.iter().all(|s| self.field(*s).is_none())
            && self.topics_viewed.is_empty()
    }
}
