//! Tests for message composition and deep links.
use clinichat::compose::MAX_LEARNED_TOPICS;
use clinichat::prelude::*;

fn sample_record() -> IntakeRecord {
    IntakeRecord {
        concern: Some("Stress / sleep".to_string()),
        duration: Some("1–4 weeks".to_string()),
        mode: Some("Online".to_string()),
        name: Some("Asha".to_string()),
        phone: None,
        preferred_time: Some("(not shared)".to_string()),
        topics_viewed: vec![],
    }
}

#[test]
fn test_compose_exact_layout() {
    let facts = ClinicFacts::default();
    let mut record = sample_record();
    record.phone = Some("919876543210".to_string());

    let expected = "Hello Rivisa Naturopathy Clinic,\n\
\n\
I’d like to request a WhatsApp call with Dr. Rita Parekh, NDDY.\n\
City: Surat, Gujarat\n\
\n\
Name: Asha\n\
Phone: 919876543210\n\
Concern: Stress / sleep\n\
Since: 1–4 weeks\n\
Preferred: Online\n\
Preferred day/time: (not shared)\n\
\n\
Clinic hours: Mon–Fri, 12:00 PM–5:00 PM (IST). 30-min slots with 15-min buffer.\n\
\n\
Learned about: (none)\n\
\n\
Notes (optional):";

    assert_eq!(MessageComposer::compose(&record, &facts), expected);
}

#[test]
fn test_compose_is_deterministic() {
    let facts = ClinicFacts::default();
    let record = sample_record();
    let first = MessageComposer::compose(&record, &facts);
    let second = MessageComposer::compose(&record.clone(), &facts.clone());
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_unset_fields_use_placeholder() {
    let message = MessageComposer::compose(&IntakeRecord::default(), &ClinicFacts::default());
    assert!(message.contains("Name: (not shared)"));
    assert!(message.contains("Concern: (not shared)"));
    assert!(message.contains("Preferred day/time: (not shared)"));
    assert!(!message.contains("Phone:"));
}

#[test]
fn test_learned_summary_is_distinct_and_capped() {
    let mut record = sample_record();
    record.topics_viewed = [
        "alpha", "beta", "alpha", "gamma", "delta", "epsilon", "zeta", "omega", "beta",
    ]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let message = MessageComposer::compose(&record, &ClinicFacts::default());
    assert_eq!(MAX_LEARNED_TOPICS, 6);
    assert!(message.contains("Learned about: alpha, beta, gamma, delta, epsilon, zeta\n"));
    assert!(!message.contains("omega"));
}

#[test]
fn test_deep_link_format() {
    let facts = ClinicFacts::default();
    let uri = build_deep_link("Hi there,\nit’s me & you?", &facts);
    assert_eq!(
        uri,
        "https://wa.me/919374519723?text=Hi%20there%2C%0Ait%E2%80%99s%20me%20%26%20you%3F"
    );
}

#[test]
fn test_deep_link_keeps_unreserved_characters() {
    let uri = build_deep_link("a-b_c.d!e~f*g'h(i)j", &ClinicFacts::default());
    assert!(uri.ends_with("?text=a-b_c.d!e~f*g'h(i)j"));
}

#[test]
fn test_deep_link_round_trip() {
    let facts = ClinicFacts::default();
    let mut record = sample_record();
    record.topics_viewed = vec!["Online vs in-clinic — what’s the difference?".to_string()];
    let message = MessageComposer::compose(&record, &facts);

    let uri = build_deep_link(&message, &facts);
    assert!(!uri.contains('\n'));
    assert!(!uri.contains(' '));
    assert_eq!(decode_link_text(&uri).as_deref(), Some(message.as_str()));
}

#[test]
fn test_deep_link_uses_configured_destination() {
    let facts = ClinicFacts {
        messaging_domain: "chat.example".to_string(),
        destination_handle: "15550100".to_string(),
        ..ClinicFacts::default()
    };
    assert!(build_deep_link("x", &facts).starts_with("https://chat.example/15550100?text=x"));
}

#[test]
fn test_decode_without_text_param() {
    assert_eq!(decode_link_text("https://wa.me/919374519723"), None);
}

#[test]
fn test_direct_contact_link_has_blank_fields() {
    let facts = ClinicFacts::default();
    let text = decode_link_text(&direct_contact_link(&facts)).unwrap();

    assert_eq!(text, MessageComposer::direct_contact_message(&facts));
    assert!(text.starts_with("Hello Rivisa Naturopathy Clinic,\n\n"));
    assert!(text.contains("\nName:\nPhone:\nConcern:\nSince when:\n"));
    assert!(text.contains("Preferred: Online / In-clinic / Either\nPreferred day/time:\n\n"));
    assert!(text.ends_with(
        "Clinic hours: Mon–Fri, 12:00 PM–5:00 PM (IST). 30-min slots with 15-min buffer."
    ));
}

#[test]
fn test_clinic_facts_from_json() {
    let facts = ClinicFacts::from_json(
        r#"{
            "clinic_name": "Harbor Wellness",
            "practitioner_name": "Dr. Lee",
            "city": "Kochi, Kerala",
            "hours_text": "Daily 9–5",
            "destination_handle": "919000000000"
        }"#,
    )
    .unwrap();
    assert_eq!(facts.messaging_domain, "wa.me");
    assert_eq!(facts.country_code, "91");
    assert_eq!(facts.city_short_name(), "Kochi");
}

#[test]
fn test_clinic_facts_reject_bad_handle() {
    let err = ClinicFacts::from_json(
        r#"{
            "clinic_name": "Harbor Wellness",
            "practitioner_name": "Dr. Lee",
            "city": "Kochi",
            "hours_text": "Daily 9–5",
            "destination_handle": "+91 900"
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHandle(_)));
}

#[test]
fn test_clinic_facts_reject_blank_city_and_hours() {
    let mut facts = ClinicFacts::default();
    facts.city = "  ".to_string();
    assert!(matches!(facts.validate(), Err(ConfigError::MissingField("city"))));

    let mut facts = ClinicFacts::default();
    facts.hours_text = String::new();
    assert!(matches!(
        facts.validate(),
        Err(ConfigError::MissingField("hours_text"))
    ));
}

#[test]
fn test_bundled_clinic_file_matches_defaults() {
    let facts = ClinicFacts::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/clinic.json"))
        .unwrap();
    assert_eq!(facts, ClinicFacts::default());
}
