use crate::dialogue::{Directive, RenderInstruction};

/// The boundary between the dialogue engine and whatever draws the chat.
///
/// Implementations append directives to a scrollable transcript in order and keep the
/// view scrolled to the latest entry.
pub trait PresentationAdapter {
    fn render(&mut self, instruction: &RenderInstruction);

    /// Empties the transcript, e.g. when a new conversation starts.
    fn clear(&mut self);
}

/// An in-memory transcript. Used by tests and headless tools.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Directive>,
    scroll_position: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Directive] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry currently scrolled into view; always the latest one.
    pub fn scroll_position(&self) -> Option<usize> {
        self.scroll_position
    }

    pub fn latest(&self) -> Option<&Directive> {
        self.entries.last()
    }

    /// Labels of the most recent choice row.
    pub fn active_choices(&self) -> Option<&[String]> {
        self.entries.iter().rev().find_map(|d| match d {
            Directive::ShowChoices { labels } => Some(labels.as_slice()),
            _ => None,
        })
    }
}

impl PresentationAdapter for Transcript {
    fn render(&mut self, instruction: &RenderInstruction) {
        for directive in instruction {
            self.entries.push(directive.clone());
            self.scroll_position = Some(self.entries.len() - 1);
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.scroll_position = None;
    }
}
