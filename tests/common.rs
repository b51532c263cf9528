//! Common test utilities for building catalogs, clinics and engines.
use clinichat::prelude::*;
use std::sync::Arc;

/// A tiny catalog with one dangling follow-up and one topic without authored follow-ups.
#[allow(dead_code)]
pub const SMALL_CATALOG_JSON: &str = r#"{
    "topic_menu": ["Where are you?", "Do you open on Sundays?", "Book a WhatsApp Call"],
    "topics": [
        {
            "question": "Where are you?",
            "answer": "Near the station.",
            "next": ["Do you open on Sundays?", "Is there parking?", "Ask another question"]
        },
        {
            "question": "Do you open on Sundays?",
            "answer": "No, weekdays only."
        }
    ]
}"#;

#[allow(dead_code)]
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog should load"))
}

#[allow(dead_code)]
pub fn small_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json(SMALL_CATALOG_JSON).expect("small catalog should load"))
}

#[allow(dead_code)]
pub fn facts() -> Arc<ClinicFacts> {
    Arc::new(ClinicFacts::default())
}

#[allow(dead_code)]
pub fn engine(collect_phone: bool) -> DialogueEngine {
    DialogueEngine::builder(builtin_catalog(), facts())
        .collect_phone(collect_phone)
        .build()
}

/// Drives a fresh engine from the main menu through the three choice steps.
#[allow(dead_code)]
pub fn engine_at_name_step(collect_phone: bool) -> DialogueEngine {
    let mut engine = engine(collect_phone);
    engine.start(EntryMode::Menu);
    engine.select_choice("Book a WhatsApp Call");
    engine.select_choice("Stress / sleep");
    engine.select_choice("1–4 weeks");
    engine.select_choice("Online");
    assert_eq!(engine.state(), DialogueState::Booking(BookingStep::Name));
    engine
}

#[allow(dead_code)]
pub fn user_messages(instruction: &RenderInstruction) -> Vec<&str> {
    instruction
        .iter()
        .filter_map(|d| match d {
            Directive::ShowMessage {
                text,
                sender: Sender::User,
            } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[allow(dead_code)]
pub fn buttons(instruction: &RenderInstruction) -> Vec<(&str, ButtonEffect)> {
    instruction
        .iter()
        .filter_map(|d| match d {
            Directive::ShowButtonAction { label, effect } => Some((label.as_str(), *effect)),
            _ => None,
        })
        .collect()
}
