//! # clinichat - Scripted Clinic Intake Chat
//!
//! **clinichat** is the dialogue engine behind a small chat widget on a clinic's website.
//! It walks a visitor through informational Q&A and a short booking form, then composes a
//! pre-filled message and a messaging-app deep link that hands the request to the clinic.
//! There is no server and no persistence: the only output is a URI.
//!
//! ## Core Workflow
//!
//! 1.  **Load Content**: Resolve the Q&A content into a `Catalog` (from JSON, a compiled
//!     artifact, or your own format via the `IntoCatalog` trait).
//! 2.  **Configure**: Describe the clinic with `ClinicFacts`.
//! 3.  **Converse**: Build a `DialogueEngine` per visitor session and feed it button picks
//!     and typed text. Every call returns a `RenderInstruction` for the presentation layer.
//! 4.  **Hand Off**: Once the booking is complete, the engine exposes the composed message
//!     and its deep link.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinichat::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Arc::new(Catalog::builtin()?);
//!     let facts = Arc::new(ClinicFacts::default());
//!
//!     let mut engine = DialogueEngine::builder(catalog, facts)
//!         .collect_phone(true)
//!         .build();
//!
//!     engine.start(EntryMode::Menu);
//!     engine.select_choice("Book a WhatsApp Call");
//!     engine.select_choice("Stress / sleep");
//!     engine.select_choice("1–4 weeks");
//!     engine.select_choice("Online");
//!     engine.submit_free_text("Asha");
//!     engine.submit_free_text("98765 43210");
//!     let done = engine.select_choice("Skip");
//!
//!     if let Some(uri) = done.link_uri() {
//!         println!("Open: {}", uri);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod prelude;
pub mod widget;
