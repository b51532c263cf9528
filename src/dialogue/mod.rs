//! The dialogue engine: a finite-state controller driving menu → Q&A → booking → done.
//!
//! An engine owns exactly one conversation. It never fails: every call returns a
//! `RenderInstruction`, and inputs that make no sense in the current state are answered
//! with a nudge back towards the valid choices.

use crate::catalog::{Action, Catalog};
use crate::compose::{MessageComposer, build_deep_link};
use crate::config::ClinicFacts;
use crate::error::DialogueIssue;
use std::sync::Arc;

mod record;
mod render;
pub mod script;
mod state;
mod steps;

pub use record::IntakeRecord;
pub use render::{ButtonEffect, Directive, RenderInstruction, Sender};
pub use state::{BookingStep, DialogueState, EntryMode};
pub use steps::{
    AnyTextValidator, FreeTextValidator, NameValidator, PhoneValidator, StepSpec, StepTable,
    normalize_phone,
};

pub struct DialogueEngineBuilder {
    catalog: Arc<Catalog>,
    facts: Arc<ClinicFacts>,
    collect_phone: bool,
}

impl DialogueEngineBuilder {
    pub fn new(catalog: Arc<Catalog>, facts: Arc<ClinicFacts>) -> Self {
        Self {
            catalog,
            facts,
            collect_phone: true,
        }
    }

    /// Whether the booking form asks for a phone number. Enabled by default.
    pub fn collect_phone(mut self, collect_phone: bool) -> Self {
        self.collect_phone = collect_phone;
        self
    }

    pub fn build(self) -> DialogueEngine {
        let steps = StepTable::new(&self.facts, self.collect_phone);
        DialogueEngine {
            catalog: self.catalog,
            facts: self.facts,
            steps,
            state: DialogueState::Menu,
            record: IntakeRecord::default(),
            outbound: None,
        }
    }
}

/// Drives a single visitor's conversation.
///
/// The catalog and clinic facts are shared read-only; state and record belong to this
/// engine alone, so every widget session should build its own engine.
pub struct DialogueEngine {
    catalog: Arc<Catalog>,
    facts: Arc<ClinicFacts>,
    steps: StepTable,
    state: DialogueState,
    record: IntakeRecord,
    outbound: Option<String>,
}

impl DialogueEngine {
    pub fn builder(catalog: Arc<Catalog>, facts: Arc<ClinicFacts>) -> DialogueEngineBuilder {
        DialogueEngineBuilder::new(catalog, facts)
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn steps(&self) -> &StepTable {
        &self.steps
    }

    pub fn facts(&self) -> &ClinicFacts {
        &self.facts
    }

    /// The composed message, available once the booking reached `Done`.
    pub fn outbound_message(&self) -> Option<&str> {
        self.outbound.as_deref()
    }

    pub fn outbound_link(&self) -> Option<String> {
        self.outbound
            .as_deref()
            .map(|message| build_deep_link(message, &self.facts))
    }

    /// True while the current booking step only takes typed input, so no choice row
    /// shown earlier is still valid.
    pub fn awaiting_text_only(&self) -> bool {
        match self.state {
            DialogueState::Booking(step) => self
                .steps
                .spec(step)
                .is_some_and(|spec| spec.choice_labels().is_empty()),
            _ => false,
        }
    }

    /// Begins a fresh conversation: the record is reset and the welcome is shown.
    pub fn start(&mut self, entry: EntryMode) -> RenderInstruction {
        self.record = IntakeRecord::default();
        self.outbound = None;
        tracing::debug!(?entry, "conversation started");

        let mut out = RenderInstruction::new();
        out.bot(script::welcome(&self.facts));
        out.bot(script::offer(&self.facts));
        match entry {
            EntryMode::Menu => self.show_menu(&mut out),
            EntryMode::Learning => self.show_topics(&mut out),
        }
        out
    }

    /// Opens in learning mode and immediately answers `question`, as if it had been
    /// picked from the topic list.
    pub fn open_with_question(&mut self, question: &str) -> RenderInstruction {
        let mut out = self.start(EntryMode::Learning);
        self.answer_topic(question, &mut out);
        out
    }

    /// Handles a button pick.
    pub fn select_choice(&mut self, label: &str) -> RenderInstruction {
        let mut out = RenderInstruction::new();
        out.user(label);

        match self.state {
            DialogueState::Menu => {
                if label == script::MENU_LEARN {
                    self.show_topics(&mut out);
                } else if label == Action::StartBooking.label() {
                    self.start_booking(&mut out);
                } else {
                    self.recover(self.unexpected(label));
                    out.bot(script::CHOICE_NUDGE);
                    self.show_menu(&mut out);
                }
            }
            DialogueState::Learning => match Action::from_label(label) {
                Some(Action::StartBooking) => self.start_booking(&mut out),
                Some(Action::AskAnotherQuestion) => self.show_topics(&mut out),
                None => self.answer_topic(label, &mut out),
            },
            DialogueState::Booking(step) => self.choose_in_step(step, label, &mut out),
            DialogueState::Done => {
                self.recover(self.unexpected(label));
                out.bot(script::CHOICE_NUDGE);
                self.show_done_actions(&mut out);
            }
        }
        out
    }

    /// Handles typed text. Only booking steps with a registered validator accept it.
    pub fn submit_free_text(&mut self, text: &str) -> RenderInstruction {
        let text = text.trim();
        let mut out = RenderInstruction::new();
        if text.is_empty() {
            return out;
        }
        out.user(text);

        let DialogueState::Booking(step) = self.state else {
            self.recover(self.unexpected(text));
            out.bot(script::CHOICE_NUDGE);
            return out;
        };

        let outcome = self
            .steps
            .spec(step)
            .and_then(|spec| spec.free_text.as_ref())
            .map(|validator| validator.validate(text));

        match outcome {
            Some(Ok(value)) => {
                self.record.set(step, value);
                self.advance(step, &mut out);
            }
            Some(Err(reason)) => {
                self.recover(DialogueIssue::InvalidFreeText {
                    step,
                    reason: reason.clone(),
                });
                out.bot(reason);
                if let Some(spec) = self.steps.spec(step) {
                    out.choices(spec.choice_labels());
                }
            }
            None => {
                self.recover(self.unexpected(text));
                out.bot(script::CHOICE_NUDGE);
            }
        }
        out
    }

    /// Handles a button action from the terminal render.
    pub fn trigger(&mut self, effect: ButtonEffect) -> RenderInstruction {
        match effect {
            ButtonEffect::RestartLearning => {
                let mut out = RenderInstruction::new();
                self.show_topics(&mut out);
                out
            }
            ButtonEffect::RestartChat => self.start(EntryMode::Menu),
        }
    }

    fn show_menu(&mut self, out: &mut RenderInstruction) {
        self.transition(DialogueState::Menu);
        out.bot(script::MENU_PROMPT);
        out.choices(vec![
            script::MENU_LEARN.to_string(),
            Action::StartBooking.label().to_string(),
        ]);
    }

    fn show_topics(&mut self, out: &mut RenderInstruction) {
        self.transition(DialogueState::Learning);
        out.bot(script::TOPIC_PROMPT);
        out.choices(self.catalog.topic_menu_labels());
    }

    fn answer_topic(&mut self, topic_id: &str, out: &mut RenderInstruction) {
        let catalog = Arc::clone(&self.catalog);
        match catalog.lookup(topic_id) {
            Some(topic) => {
                self.transition(DialogueState::Learning);
                self.record.topics_viewed.push(topic.id.clone());
                out.bot(topic.answer.as_str());
                out.choices(topic.follow_up_labels());
            }
            None => {
                self.recover(DialogueIssue::UnknownTopic(topic_id.to_string()));
                out.bot(script::TOPIC_NUDGE);
                self.show_topics(out);
            }
        }
    }

    fn start_booking(&mut self, out: &mut RenderInstruction) {
        self.outbound = None;
        let first = self.steps.first();
        self.transition(DialogueState::Booking(first));
        out.bot(script::booking_intro(&self.facts));
        if let Some(spec) = self.steps.spec(first) {
            spec.render_prompt(out);
        }
    }

    fn choose_in_step(&mut self, step: BookingStep, label: &str, out: &mut RenderInstruction) {
        let Some(spec) = self.steps.spec(step) else {
            // Only reachable if the table changed under a live state.
            self.recover(self.unexpected(label));
            self.show_menu(out);
            return;
        };

        match spec.choice_value(label) {
            Some(value) => {
                self.record.set(step, value);
                self.advance(step, out);
            }
            None => {
                let nudge = if spec.choice_labels().is_empty() {
                    script::TYPE_NUDGE
                } else {
                    script::CHOICE_NUDGE
                };
                out.bot(nudge);
                spec.render_prompt(out);
                self.recover(self.unexpected(label));
            }
        }
    }

    fn advance(&mut self, step: BookingStep, out: &mut RenderInstruction) {
        match self.steps.next_after(step) {
            Some(next) => {
                self.transition(DialogueState::Booking(next));
                if let Some(spec) = self.steps.spec(next) {
                    spec.render_prompt(out);
                }
            }
            None => self.finish(out),
        }
    }

    fn finish(&mut self, out: &mut RenderInstruction) {
        self.transition(DialogueState::Done);
        let message = MessageComposer::compose(&self.record, &self.facts);
        tracing::info!(
            concern = ?self.record.concern,
            topics_viewed = self.record.topics_viewed.len(),
            "booking request composed"
        );
        self.outbound = Some(message);

        out.bot(script::DONE_READY);
        out.bot(script::DONE_SEND_HINT);
        self.show_done_actions(out);
    }

    fn show_done_actions(&self, out: &mut RenderInstruction) {
        if let Some(uri) = self.outbound_link() {
            out.link(script::OPEN_LINK_LABEL, uri);
        }
        out.button(script::LEARN_MORE_LABEL, ButtonEffect::RestartLearning);
        out.button(script::START_OVER_LABEL, ButtonEffect::RestartChat);
    }

    fn transition(&mut self, next: DialogueState) {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "dialogue transition");
            self.state = next;
        }
    }

    fn unexpected(&self, input: &str) -> DialogueIssue {
        DialogueIssue::UnexpectedInput {
            state: self.state,
            input: input.to_string(),
        }
    }

    fn recover(&self, issue: DialogueIssue) {
        match &issue {
            DialogueIssue::UnknownTopic(_) => tracing::warn!(%issue, "recovered"),
            _ => tracing::debug!(%issue, "recovered"),
        }
    }
}
