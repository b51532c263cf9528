//! Fixed conversation copy. Clinic-specific values come from `ClinicFacts`.

use crate::config::ClinicFacts;

pub const MENU_PROMPT: &str = "What would you like to do?";
pub const MENU_LEARN: &str = "Learn about Naturopathy";
pub const TOPIC_PROMPT: &str = "Choose a question:";

pub const SKIP_LABEL: &str = "Skip";
/// Stored for skipped optional fields and rendered for unset ones.
pub const NOT_SHARED: &str = "(not shared)";

pub const TOPIC_NUDGE: &str = "Please tap one of the options, or request a WhatsApp call.";
pub const CHOICE_NUDGE: &str = "Please tap one of the options above, or request a WhatsApp call.";
pub const TYPE_NUDGE: &str = "Please type your answer below and tap Send.";

pub const DONE_READY: &str = "Perfect ✅ I’ve prepared your WhatsApp call request.";
pub const DONE_SEND_HINT: &str = "After WhatsApp opens, please tap Send ✅";
pub const OPEN_LINK_LABEL: &str = "Open WhatsApp Message";
pub const LEARN_MORE_LABEL: &str = "Learn more about naturopathy";
pub const START_OVER_LABEL: &str = "Start over";

pub fn welcome(facts: &ClinicFacts) -> String {
    format!("Hi 👋 Welcome to {}.", facts.clinic_name)
}

pub fn offer(facts: &ClinicFacts) -> String {
    format!(
        "I can answer quick questions or help you request a WhatsApp call with {}.",
        facts.practitioner_name
    )
}

pub fn booking_intro(facts: &ClinicFacts) -> String {
    format!(
        "Great — we’ll request a WhatsApp call. Clinic hours: {}",
        facts.hours_text
    )
}
