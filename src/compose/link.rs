use super::MessageComposer;
use crate::config::ClinicFacts;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except the unreserved URI component characters, so line breaks and
/// reserved characters like `&`, `?` and `#` are always escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const TEXT_PARAM: &str = "?text=";

/// Builds `https://<domain>/<handle>?text=<encoded message>`.
pub fn build_deep_link(message: &str, facts: &ClinicFacts) -> String {
    let encoded = utf8_percent_encode(message, URI_COMPONENT);
    format!(
        "https://{}/{}{}{}",
        facts.messaging_domain, facts.destination_handle, TEXT_PARAM, encoded
    )
}

/// Extracts and decodes the `text` parameter of a deep link.
///
/// Returns `None` when the link carries no `text` parameter or it is not valid UTF-8.
pub fn decode_link_text(uri: &str) -> Option<String> {
    let (_, rest) = uri.split_once(TEXT_PARAM)?;
    let encoded = rest.split('&').next().unwrap_or_default();
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|text| text.into_owned())
}

/// The static "direct contact" link, derivable without any conversation.
pub fn direct_contact_link(facts: &ClinicFacts) -> String {
    build_deep_link(&MessageComposer::direct_contact_message(facts), facts)
}
