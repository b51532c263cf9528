use super::definition::{CatalogDocument, TopicDefinition};
use super::topic::Action;
use crate::error::CatalogError;

/// A trait for custom content models that can be converted into a `CatalogDocument`.
///
/// This is the extension point for authoring content in a different shape: implement it
/// on your own structs and hand them to `Catalog::from_source`.
///
/// # Example
///
/// ```rust,no_run
/// use clinichat::catalog::{Catalog, CatalogDocument, IntoCatalog, TopicDefinition};
/// use clinichat::error::CatalogError;
///
/// struct Faq {
///     entries: Vec<(String, String)>,
/// }
///
/// impl IntoCatalog for Faq {
///     fn into_document(self) -> Result<CatalogDocument, CatalogError> {
///         let topics: Vec<TopicDefinition> = self
///             .entries
///             .into_iter()
///             .map(|(question, answer)| TopicDefinition { question, answer, next: None })
///             .collect();
///         topics.into_document()
///     }
/// }
///
/// let faq = Faq { entries: vec![("Where are you?".into(), "Surat.".into())] };
/// let catalog = Catalog::from_source(faq).unwrap();
/// assert!(catalog.lookup("Where are you?").is_some());
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into authored catalog content.
    fn into_document(self) -> Result<CatalogDocument, CatalogError>;
}

impl IntoCatalog for CatalogDocument {
    fn into_document(self) -> Result<CatalogDocument, CatalogError> {
        Ok(self)
    }
}

/// A flat list of topics gets a menu listing every question in order, followed by the
/// booking action.
impl IntoCatalog for Vec<TopicDefinition> {
    fn into_document(self) -> Result<CatalogDocument, CatalogError> {
        let mut topic_menu: Vec<String> = self.iter().map(|t| t.question.clone()).collect();
        topic_menu.push(Action::StartBooking.label().to_string());
        Ok(CatalogDocument {
            topic_menu,
            topics: self,
        })
    }
}
