//! Tests for catalog loading, resolution and compiled artifacts.
mod common;
use clinichat::catalog::DanglingReference;
use clinichat::prelude::*;
use common::*;

#[test]
fn test_builtin_catalog_is_complete() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 10);
    assert!(catalog.dangling_references().is_empty());
    assert!(catalog.ensure_complete().is_ok());
}

#[test]
fn test_topic_menu_resolves_actions() {
    let catalog = Catalog::builtin().unwrap();
    let menu = catalog.topic_menu();
    assert_eq!(menu.len(), 5);
    assert_eq!(menu[0], NextStep::Topic("What is naturopathy?".to_string()));
    assert_eq!(menu[4], NextStep::Action(Action::StartBooking));
    assert_eq!(catalog.topic_menu_labels()[4], "Book a WhatsApp Call");
}

#[test]
fn test_follow_ups_keep_authored_order() {
    let catalog = Catalog::builtin().unwrap();
    let topic = catalog.lookup("Is naturopathy safe?").unwrap();
    assert_eq!(
        topic.follow_ups,
        vec![
            NextStep::Topic("Can I do this along with my current medicines?".to_string()),
            NextStep::Action(Action::StartBooking),
            NextStep::Action(Action::AskAnotherQuestion),
        ]
    );
}

#[test]
fn test_lookup_is_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    let first = catalog.lookup("Do you give diet plans?").cloned();
    let second = catalog.lookup("Do you give diet plans?").cloned();
    assert!(first.is_some());
    assert_eq!(first, second);
    assert!(catalog.lookup("Do you give diet plans").is_none());
}

#[test]
fn test_action_labels_match_exactly() {
    assert_eq!(
        Action::from_label("Book a WhatsApp Call"),
        Some(Action::StartBooking)
    );
    assert_eq!(
        Action::from_label("Ask another question"),
        Some(Action::AskAnotherQuestion)
    );
    assert_eq!(Action::from_label("book a whatsapp call"), None);
    assert_eq!(
        NextStep::resolve("Ask another question "),
        NextStep::Topic("Ask another question ".to_string())
    );
}

#[test]
fn test_missing_follow_ups_get_defaults() {
    let catalog = Catalog::from_json(SMALL_CATALOG_JSON).unwrap();
    let topic = catalog.lookup("Do you open on Sundays?").unwrap();
    assert_eq!(
        topic.follow_up_labels(),
        vec!["Ask another question", "Book a WhatsApp Call"]
    );
}

#[test]
fn test_dangling_reference_is_tolerated_then_reported() {
    let catalog = Catalog::from_json(SMALL_CATALOG_JSON).unwrap();
    assert_eq!(
        catalog.dangling_references(),
        vec![DanglingReference {
            source_topic_id: "Where are you?".to_string(),
            missing_topic_id: "Is there parking?".to_string(),
        }]
    );

    let err = catalog.ensure_complete().unwrap_err();
    assert!(matches!(err, CatalogError::DanglingReference { .. }));
    assert!(err.to_string().contains("Is there parking?"));
}

#[test]
fn test_duplicate_topics_are_rejected() {
    let document = CatalogDocument {
        topic_menu: vec![],
        topics: vec![
            TopicDefinition {
                question: "Q".to_string(),
                answer: "first".to_string(),
                next: None,
            },
            TopicDefinition {
                question: "Q".to_string(),
                answer: "second".to_string(),
                next: None,
            },
        ],
    };
    let err = Catalog::from_document(document).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateTopic(ref id) if id == "Q"));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::JsonParseError(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let err = Catalog::from_file("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn test_flat_topic_list_conversion() {
    let topics = vec![
        TopicDefinition {
            question: "Where are you?".to_string(),
            answer: "Surat.".to_string(),
            next: None,
        },
        TopicDefinition {
            question: "Do you have parking?".to_string(),
            answer: "Yes.".to_string(),
            next: Some(vec!["Where are you?".to_string()]),
        },
    ];
    let catalog = Catalog::from_source(topics).unwrap();
    assert_eq!(
        catalog.topic_menu_labels(),
        vec!["Where are you?", "Do you have parking?", "Book a WhatsApp Call"]
    );
    assert!(catalog.dangling_references().is_empty());
}

#[test]
fn test_compiled_catalog_bytes_round_trip() {
    let catalog = Catalog::builtin().unwrap();
    let bytes = CompiledCatalog::new(catalog.clone()).to_bytes().unwrap();
    let restored = CompiledCatalog::from_bytes(&bytes).unwrap();
    assert_eq!(restored.format_version, clinichat::catalog::ARTIFACT_FORMAT_VERSION);
    assert_eq!(restored.into_catalog(), catalog);
}

#[test]
fn test_compiled_catalog_file_round_trip() {
    let catalog = Catalog::from_json(SMALL_CATALOG_JSON).unwrap();
    let path =
        std::env::temp_dir().join(format!("clinichat-catalog-{}.bin", std::process::id()));
    let path = path.to_string_lossy().to_string();

    CompiledCatalog::new(catalog.clone()).save(&path).unwrap();
    let restored = CompiledCatalog::from_file(&path).unwrap().into_catalog();
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored, catalog);
    assert_eq!(restored.dangling_references().len(), 1);
}

#[test]
fn test_truncated_artifact_fails_to_decode() {
    let bytes = CompiledCatalog::new(Catalog::builtin().unwrap())
        .to_bytes()
        .unwrap();
    let err = CompiledCatalog::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, ArtifactError::Decode(_)));
}
