use crate::dialogue::{BookingStep, DialogueState};
use thiserror::Error;

/// Errors that can occur while loading or resolving a content catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Topic '{0}' is defined more than once")]
    DuplicateTopic(String),

    #[error("Follow-up '{missing_topic_id}' of topic '{source_topic_id}' has no catalog entry")]
    DanglingReference {
        missing_topic_id: String,
        source_topic_id: String,
    },
}

/// Errors that can occur while loading the clinic facts configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse clinic configuration JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read clinic configuration '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination handle '{0}' must be a non-empty string of digits")]
    InvalidHandle(String),

    #[error("Country code '{0}' must be a non-empty string of digits")]
    InvalidCountryCode(String),

    #[error("Field '{0}' must not be empty")]
    MissingField(&'static str),
}

/// Errors raised when saving or loading a compiled catalog artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Deserialization failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Could not access artifact file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Problems with user input during a conversation.
///
/// These never leave the engine as `Err`: each one is logged and answered with a
/// corrective nudge, and the conversation stays in a continuable state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogueIssue {
    #[error("Topic '{0}' is not in the catalog")]
    UnknownTopic(String),

    #[error("Input rejected at step {step}: {reason}")]
    InvalidFreeText { step: BookingStep, reason: String },

    #[error("Input '{input}' is not valid while in state {state}")]
    UnexpectedInput { state: DialogueState, input: String },
}
