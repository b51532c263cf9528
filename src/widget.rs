use crate::adapter::PresentationAdapter;
use crate::catalog::Catalog;
use crate::compose::direct_contact_link;
use crate::config::ClinicFacts;
use crate::dialogue::{ButtonEffect, DialogueEngine, EntryMode};
use std::sync::Arc;

/// The chat widget: opens and closes conversations and feeds engine output to an adapter.
///
/// Each `open` builds a fresh engine, so nothing carries over from a previous session.
/// Input while the widget is closed is ignored.
pub struct Widget<A: PresentationAdapter> {
    catalog: Arc<Catalog>,
    facts: Arc<ClinicFacts>,
    collect_phone: bool,
    adapter: A,
    engine: Option<DialogueEngine>,
}

impl<A: PresentationAdapter> Widget<A> {
    pub fn new(catalog: Arc<Catalog>, facts: Arc<ClinicFacts>, adapter: A) -> Self {
        Self {
            catalog,
            facts,
            collect_phone: true,
            adapter,
            engine: None,
        }
    }

    pub fn with_phone_collection(mut self, collect_phone: bool) -> Self {
        self.collect_phone = collect_phone;
        self
    }

    pub fn open(&mut self, entry: EntryMode) {
        let engine = self.fresh_engine();
        let instruction = engine.start(entry);
        self.adapter.render(&instruction);
    }

    /// Opens in learning mode and answers a "popular question" right away.
    pub fn open_with_question(&mut self, question: &str) {
        let engine = self.fresh_engine();
        let instruction = engine.open_with_question(question);
        self.adapter.render(&instruction);
    }

    pub fn select_choice(&mut self, label: &str) {
        if let Some(engine) = self.engine.as_mut() {
            let instruction = engine.select_choice(label);
            self.adapter.render(&instruction);
        } else {
            tracing::debug!(label, "choice ignored, widget is closed");
        }
    }

    pub fn submit_free_text(&mut self, text: &str) {
        if let Some(engine) = self.engine.as_mut() {
            let instruction = engine.submit_free_text(text);
            self.adapter.render(&instruction);
        } else {
            tracing::debug!("free text ignored, widget is closed");
        }
    }

    pub fn trigger(&mut self, effect: ButtonEffect) {
        if let Some(engine) = self.engine.as_mut() {
            if effect == ButtonEffect::RestartChat {
                self.adapter.clear();
            }
            let instruction = engine.trigger(effect);
            self.adapter.render(&instruction);
        }
    }

    /// Closing discards the conversation.
    pub fn close(&mut self) {
        self.engine = None;
    }

    pub fn is_open(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&DialogueEngine> {
        self.engine.as_ref()
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// The blank-template link for the "direct contact" button, no conversation needed.
    pub fn direct_contact_link(&self) -> String {
        direct_contact_link(&self.facts)
    }

    fn fresh_engine(&mut self) -> &mut DialogueEngine {
        self.adapter.clear();
        let engine = DialogueEngine::builder(Arc::clone(&self.catalog), Arc::clone(&self.facts))
            .collect_phone(self.collect_phone)
            .build();
        self.engine.insert(engine)
    }
}
