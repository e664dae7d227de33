//! Binary/text codec for the form/JSON transport
//!
//! Standard base64 on encode. Decode also accepts the url-safe alphabet and
//! repairs missing padding, since download links and older clients produce
//! url-safe unpadded fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{SatchelError, SatchelResult};

/// Encode bytes with the standard base64 alphabet, padded.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard or url-safe base64, right-padding to a multiple of four
/// characters first.
///
/// Anything else (wrong alphabet, impossible length after padding repair) is
/// a [`SatchelError::Decode`]; the codec never truncates.
pub fn decode(encoded: &str) -> SatchelResult<Vec<u8>> {
    let mut normalized = encoded.replace('-', "+").replace('_', "/");
    let padding = (4 - normalized.len() % 4) % 4;
    for _ in 0..padding {
        normalized.push('=');
    }
    STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| SatchelError::Decode(e.to_string()))
}
