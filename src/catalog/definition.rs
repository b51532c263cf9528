use serde::{Deserialize, Serialize};

/// The authored content of a catalog, before follow-up labels are resolved.
/// This is the target structure for any custom content conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Labels offered when the visitor is asked to choose a question.
    pub topic_menu: Vec<String>,
    pub topics: Vec<TopicDefinition>,
}

/// A single authored question and its answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDefinition {
    pub question: String,
    pub answer: String,
    /// Follow-up labels in display order. `None` falls back to the default
    /// "ask another / book" pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Vec<String>>,
}
