use super::render::RenderInstruction;
use super::script::{NOT_SHARED, SKIP_LABEL};
use super::state::BookingStep;
use crate::config::ClinicFacts;

/// Checks and normalizes free text typed at a booking step.
pub trait FreeTextValidator: Send + Sync {
    /// Returns the value to store, or the corrective message to show.
    fn validate(&self, input: &str) -> Result<String, String>;
}

/// Requires at least two characters after trimming.
pub struct NameValidator;

impl FreeTextValidator for NameValidator {
    fn validate(&self, input: &str) -> Result<String, String> {
        let name = input.trim();
        if name.chars().count() >= 2 {
            Ok(name.to_string())
        } else {
            Err("Please enter your name (at least 2 characters), or tap Skip.".to_string())
        }
    }
}

pub struct PhoneValidator {
    pub country_code: String,
}

impl FreeTextValidator for PhoneValidator {
    fn validate(&self, input: &str) -> Result<String, String> {
        let normalized = normalize_phone(input, &self.country_code);
        if normalized.len() < 11 {
            Err("Please enter a valid phone number (10 digits is okay).".to_string())
        } else {
            Ok(normalized)
        }
    }
}

/// Accepts any non-empty text as-is.
pub struct AnyTextValidator;

impl FreeTextValidator for AnyTextValidator {
    fn validate(&self, input: &str) -> Result<String, String> {
        let text = input.trim();
        if text.is_empty() {
            Err("Please type something, or tap Skip.".to_string())
        } else {
            Ok(text.to_string())
        }
    }
}

/// Strips every non-digit; a 10-digit result is treated as domestic and gets the
/// country code prepended. Empty input stays empty.
pub fn normalize_phone(input: &str, country_code: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("{country_code}{digits}")
    } else {
        digits
    }
}

/// Everything the engine needs to run one booking step.
pub struct StepSpec {
    pub step: BookingStep,
    pub prompt: String,
    /// Labels stored verbatim when picked.
    pub choices: Vec<String>,
    /// Offers a "Skip" choice that stores the placeholder.
    pub skippable: bool,
    pub free_text: Option<Box<dyn FreeTextValidator>>,
}

impl StepSpec {
    fn choice_step(step: BookingStep, prompt: &str, choices: &[&str]) -> Self {
        Self {
            step,
            prompt: prompt.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            skippable: false,
            free_text: None,
        }
    }

    fn text_step(
        step: BookingStep,
        prompt: &str,
        skippable: bool,
        validator: Box<dyn FreeTextValidator>,
    ) -> Self {
        Self {
            step,
            prompt: prompt.to_string(),
            choices: Vec::new(),
            skippable,
            free_text: Some(validator),
        }
    }

    /// Labels offered as buttons, including "Skip" where allowed.
    pub fn choice_labels(&self) -> Vec<String> {
        let mut labels = self.choices.clone();
        if self.skippable {
            labels.push(SKIP_LABEL.to_string());
        }
        labels
    }

    /// The value a picked label stores, or `None` if the label is not valid here.
    pub fn choice_value(&self, label: &str) -> Option<String> {
        if self.choices.iter().any(|c| c == label) {
            Some(label.to_string())
        } else if self.skippable && label == SKIP_LABEL {
            Some(NOT_SHARED.to_string())
        } else {
            None
        }
    }

    pub fn render_prompt(&self, out: &mut RenderInstruction) {
        out.bot(self.prompt.as_str());
        out.choices(self.choice_labels());
    }
}

/// The ordered booking form. Validators are registered per step here, so the engine
/// never branches on step identity.
pub struct StepTable {
    steps: Vec<StepSpec>,
}

impl StepTable {
    pub fn new(facts: &ClinicFacts, collect_phone: bool) -> Self {
        let in_clinic = format!("In-clinic ({})", facts.city_short_name());
        let mut steps = vec![
            StepSpec::choice_step(
                BookingStep::Concern,
                "What are you looking for help with?",
                &[
                    "Diabetes / metabolic health",
                    "Lifestyle disorders / weight",
                    "Acidity / digestive issues",
                    "Stress / sleep",
                    "Joint pain / body pain",
                    "Other",
                ],
            ),
            StepSpec::choice_step(
                BookingStep::Duration,
                "Since when has this been happening?",
                &["< 1 week", "1–4 weeks", "1–6 months", "> 6 months"],
            ),
            StepSpec::choice_step(
                BookingStep::Mode,
                "Preferred consultation type?",
                &["Online", in_clinic.as_str(), "Either is fine"],
            ),
            StepSpec::text_step(
                BookingStep::Name,
                "Your name? (optional — type it below and tap Send, or Skip)",
                true,
                Box::new(NameValidator),
            ),
        ];
        if collect_phone {
            steps.push(StepSpec::text_step(
                BookingStep::Phone,
                "Phone number for WhatsApp call (required). Please type it below and tap Send.",
                false,
                Box::new(PhoneValidator {
                    country_code: facts.country_code.clone(),
                }),
            ));
        }
        steps.push(StepSpec::text_step(
            BookingStep::PreferredTime,
            "Any preferred day/time? (optional). Example: “Tue 2–4 PM”. Type below or Skip.",
            true,
            Box::new(AnyTextValidator),
        ));
        Self { steps }
    }

    pub fn first(&self) -> BookingStep {
        self.steps
            .first()
            .map(|s| s.step)
            .unwrap_or(BookingStep::Concern)
    }

    pub fn spec(&self, step: BookingStep) -> Option<&StepSpec> {
        self.steps.iter().find(|s| s.step == step)
    }

    /// The step after `step`, or `None` when the form is complete.
    pub fn next_after(&self, step: BookingStep) -> Option<BookingStep> {
        let position = self.steps.iter().position(|s| s.step == step)?;
        self.steps.get(position + 1).map(|s| s.step)
    }

    pub fn sequence(&self) -> Vec<BookingStep> {
        self.steps.iter().map(|s| s.step).collect()
    }
}
