//! Turning a finished intake record into the outbound message and its deep link.

mod composer;
mod link;

pub use composer::{MAX_LEARNED_TOPICS, MessageComposer};
pub use link::{build_deep_link, decode_link_text, direct_contact_link};
