//! Inline image encoding.
//!
//! Project images are embedded in the record as standard (padded) base64
//! text rather than stored in a separate blob store.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode raw image bytes for storage in a project record.
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
