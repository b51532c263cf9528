use serde::{Deserialize, Serialize};

/// Who a transcript message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// What a button action does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonEffect {
    /// Back to the topic list, keeping the intake record.
    RestartLearning,
    /// A brand new conversation from the main menu.
    RestartChat,
}

/// A single thing the presentation layer should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    ShowMessage { text: String, sender: Sender },
    /// Each label is a valid next input for `select_choice`.
    ShowChoices { labels: Vec<String> },
    /// Opened in a new browsing context.
    ShowLinkAction { label: String, uri: String },
    ShowButtonAction { label: String, effect: ButtonEffect },
}

/// The ordered output of one engine call. The adapter replays it onto the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderInstruction {
    directives: Vec<Directive>,
}

impl RenderInstruction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bot(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Directive::ShowMessage {
            text: text.into(),
            sender: Sender::Bot,
        })
    }

    pub fn user(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Directive::ShowMessage {
            text: text.into(),
            sender: Sender::User,
        })
    }

    /// Adds a choice row. An empty label list adds nothing.
    pub fn choices(&mut self, labels: Vec<String>) -> &mut Self {
        if labels.is_empty() {
            return self;
        }
        self.push(Directive::ShowChoices { labels })
    }

    pub fn link(&mut self, label: impl Into<String>, uri: impl Into<String>) -> &mut Self {
        self.push(Directive::ShowLinkAction {
            label: label.into(),
            uri: uri.into(),
        })
    }

    pub fn button(&mut self, label: impl Into<String>, effect: ButtonEffect) -> &mut Self {
        self.push(Directive::ShowButtonAction {
            label: label.into(),
            effect,
        })
    }

    pub fn push(&mut self, directive: Directive) -> &mut Self {
        self.directives.push(directive);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.directives.iter()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Texts of all bot messages, in order.
    pub fn bot_messages(&self) -> Vec<&str> {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::ShowMessage {
                    text,
                    sender: Sender::Bot,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The labels of the last choice row, if any.
    pub fn last_choices(&self) -> Option<&[String]> {
        self.directives.iter().rev().find_map(|d| match d {
            Directive::ShowChoices { labels } => Some(labels.as_slice()),
            _ => None,
        })
    }

    pub fn link_uri(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            Directive::ShowLinkAction { uri, .. } => Some(uri.as_str()),
            _ => None,
        })
    }
}

impl IntoIterator for RenderInstruction {
    type Item = Directive;
    type IntoIter = std::vec::IntoIter<Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderInstruction {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}
