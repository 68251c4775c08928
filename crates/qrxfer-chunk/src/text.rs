//! Payload ⇄ Base64 text.
//!
//! Standard alphabet with padding. The alphabet never contains `:` so chunk
//! data can be embedded after the metadata separator verbatim.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Render payload bytes as standard padded Base64.
pub fn encode_payload(payload: &[u8]) -> String {
    STANDARD.encode(payload)
}

/// Decode standard padded Base64 back to payload bytes.
///
/// Fails with [`ChunkError::MalformedEncoding`](crate::ChunkError::MalformedEncoding)
/// on a bad length, an invalid character, or invalid padding.
pub fn decode_payload(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
