use crate::config::ClinicFacts;
use crate::dialogue::IntakeRecord;
use crate::dialogue::script::NOT_SHARED;
use itertools::Itertools;

/// At most this many distinct viewed topics are listed in the message.
pub const MAX_LEARNED_TOPICS: usize = 6;

/// Formats intake records into the text sent to the clinic.
pub struct MessageComposer;

impl MessageComposer {
    /// Compose the outbound message. Same inputs always give byte-identical output.
    ///
    /// Unset fields show the `(not shared)` placeholder, except the phone line, which only
    /// appears when a phone number was collected.
    pub fn compose(record: &IntakeRecord, facts: &ClinicFacts) -> String {
        let mut lines = Self::header(facts);

        lines.push(format!("Name: {}", Self::or_placeholder(&record.name)));
        if let Some(phone) = &record.phone {
            lines.push(format!("Phone: {}", phone));
        }
        lines.push(format!("Concern: {}", Self::or_placeholder(&record.concern)));
        lines.push(format!("Since: {}", Self::or_placeholder(&record.duration)));
        lines.push(format!("Preferred: {}", Self::or_placeholder(&record.mode)));
        lines.push(format!(
            "Preferred day/time: {}",
            Self::or_placeholder(&record.preferred_time)
        ));
        lines.push(String::new());
        lines.push(format!("Clinic hours: {}", facts.hours_text));
        lines.push(String::new());
        lines.push(Self::learned_summary(&record.topics_viewed));
        lines.push(String::new());
        lines.push("Notes (optional):".to_string());

        lines.join("\n")
    }

    /// The blank request template used by the direct-contact entry point.
    pub fn direct_contact_message(facts: &ClinicFacts) -> String {
        let mut lines = Self::header(facts);
        lines.extend(
            [
                "Name:",
                "Phone:",
                "Concern:",
                "Since when:",
                "Preferred: Online / In-clinic / Either",
                "Preferred day/time:",
                "",
            ]
            .map(String::from),
        );
        lines.push(format!("Clinic hours: {}", facts.hours_text));
        lines.join("\n")
    }

    fn header(facts: &ClinicFacts) -> Vec<String> {
        vec![
            format!("Hello {},", facts.clinic_name),
            String::new(),
            format!(
                "I’d like to request a WhatsApp call with {}.",
                facts.practitioner_name
            ),
            format!("City: {}", facts.city),
            String::new(),
        ]
    }

    fn learned_summary(topics: &[String]) -> String {
        if topics.is_empty() {
            return "Learned about: (none)".to_string();
        }
        let learned = topics.iter().unique().take(MAX_LEARNED_TOPICS).join(", ");
        format!("Learned about: {}", learned)
    }

    fn or_placeholder(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or(NOT_SHARED)
    }
}
