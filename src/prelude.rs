//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the clinichat crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use clinichat::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Arc::new(Catalog::from_file("data/naturopathy.json")?);
//! let facts = Arc::new(ClinicFacts::from_file("data/clinic.json")?);
//!
//! let mut widget = Widget::new(catalog, facts, Transcript::new());
//! widget.open(EntryMode::Learning);
//! widget.select_choice("What is naturopathy?");
//!
//! println!("{} entries in the transcript", widget.adapter().len());
//! # Ok(())
//! # }
//! ```

// Engine and widget
pub use crate::dialogue::{
    BookingStep, ButtonEffect, DialogueEngine, DialogueState, Directive, EntryMode,
    IntakeRecord, RenderInstruction, Sender,
};
pub use crate::widget::Widget;

// Presentation boundary
pub use crate::adapter::{PresentationAdapter, Transcript};

// Content and configuration
pub use crate::catalog::{
    Action, Catalog, CatalogDocument, CompiledCatalog, IntoCatalog, NextStep, Topic,
    TopicDefinition,
};
pub use crate::config::ClinicFacts;

// Message composition
pub use crate::compose::{MessageComposer, build_deep_link, decode_link_text, direct_contact_link};

// Error types
pub use crate::error::{ArtifactError, CatalogError, ConfigError, DialogueIssue};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
