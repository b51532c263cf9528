//! End-to-end tests driving the widget through an in-memory transcript.
mod common;
use clinichat::prelude::*;
use common::*;

fn widget() -> Widget<Transcript> {
    Widget::new(builtin_catalog(), facts(), Transcript::new())
}

#[test]
fn test_transcript_scrolls_to_latest_entry() {
    let mut widget = widget();
    widget.open(EntryMode::Learning);
    widget.select_choice("What can naturopathy help with?");

    let transcript = widget.adapter();
    assert_eq!(transcript.scroll_position(), Some(transcript.len() - 1));
    assert_eq!(
        transcript.active_choices().unwrap()[0],
        "Do you treat diabetes and obesity?"
    );
}

#[test]
fn test_transcript_keeps_directive_order() {
    let mut widget = widget();
    widget.open(EntryMode::Menu);
    widget.select_choice("Book a WhatsApp Call");

    let entries = widget.adapter().entries();
    let user_pick = entries
        .iter()
        .position(|d| {
            matches!(
                d,
                Directive::ShowMessage { text, sender: Sender::User }
                    if text == "Book a WhatsApp Call"
            )
        })
        .unwrap();
    let concern_prompt = entries
        .iter()
        .position(|d| {
            matches!(
                d,
                Directive::ShowMessage { text, .. } if text == "What are you looking for help with?"
            )
        })
        .unwrap();
    assert!(user_pick < concern_prompt);
}

#[test]
fn test_full_booking_through_widget() {
    let mut widget = widget().with_phone_collection(false);
    widget.open(EntryMode::Menu);
    for label in ["Book a WhatsApp Call", "Stress / sleep", "1–4 weeks", "Online"] {
        widget.select_choice(label);
    }
    widget.submit_free_text("Asha");
    widget.select_choice("Skip");

    let engine = widget.engine().unwrap();
    assert_eq!(engine.state(), DialogueState::Done);
    let message = engine.outbound_message().unwrap().to_string();

    let link = widget
        .adapter()
        .entries()
        .iter()
        .find_map(|d| match d {
            Directive::ShowLinkAction { uri, .. } => Some(uri.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(decode_link_text(&link), Some(message));
    assert!(matches!(
        widget.adapter().latest(),
        Some(Directive::ShowButtonAction {
            effect: ButtonEffect::RestartChat,
            ..
        })
    ));
}

#[test]
fn test_close_discards_conversation() {
    let mut widget = widget();
    widget.open(EntryMode::Menu);
    widget.select_choice("Book a WhatsApp Call");
    widget.select_choice("Other");
    widget.close();

    assert!(!widget.is_open());
    let before = widget.adapter().len();
    widget.select_choice("1–4 weeks");
    widget.submit_free_text("hello");
    assert_eq!(widget.adapter().len(), before);

    widget.open(EntryMode::Menu);
    let engine = widget.engine().unwrap();
    assert!(engine.record().is_empty());
    assert_eq!(engine.state(), DialogueState::Menu);
    assert_eq!(widget.adapter().len(), 4);
}

#[test]
fn test_restart_chat_clears_transcript() {
    let mut widget = widget().with_phone_collection(false);
    widget.open(EntryMode::Menu);
    for label in ["Book a WhatsApp Call", "Other", "< 1 week", "Online", "Skip", "Skip"] {
        widget.select_choice(label);
    }
    assert!(widget.adapter().len() > 4);

    widget.trigger(ButtonEffect::RestartChat);
    assert_eq!(widget.adapter().len(), 4);
    assert!(widget.engine().unwrap().record().is_empty());
}

#[test]
fn test_popular_question_entry() {
    let mut widget = widget();
    widget.open_with_question("Is naturopathy safe?");

    let engine = widget.engine().unwrap();
    assert_eq!(engine.state(), DialogueState::Learning);
    assert_eq!(engine.record().topics_viewed, vec!["Is naturopathy safe?"]);
    assert_eq!(
        widget.adapter().active_choices().unwrap(),
        [
            "Can I do this along with my current medicines?",
            "Book a WhatsApp Call",
            "Ask another question",
        ]
    );
}

#[test]
fn test_sessions_do_not_share_state() {
    let mut first = widget();
    let mut second = widget();
    first.open(EntryMode::Menu);
    second.open(EntryMode::Learning);

    first.select_choice("Book a WhatsApp Call");
    first.select_choice("Other");
    second.select_choice("What is naturopathy?");

    let a = first.engine().unwrap();
    let b = second.engine().unwrap();
    assert_eq!(a.state(), DialogueState::Booking(BookingStep::Duration));
    assert_eq!(b.state(), DialogueState::Learning);
    assert!(a.record().topics_viewed.is_empty());
    assert!(b.record().concern.is_none());
}

#[test]
fn test_direct_link_without_conversation() {
    let widget = widget();
    assert!(!widget.is_open());
    let link = widget.direct_contact_link();
    assert!(link.starts_with("https://wa.me/919374519723?text=Hello%20Rivisa"));
}
