//! Latin-1 text conversion for string fields.
//!
//! Text fields on the wire are length-prefixed single-byte-per-character
//! strings in an 8-bit fixed encoding (latin-1). Latin-1 maps byte values
//! directly onto the first 256 Unicode code points, so decoding cannot
//! fail; encoding fails for characters above U+00FF.

use crate::error::{CreditsError, Result};

/// Maximum byte length of a text field (single-byte length prefix).
pub const MAX_TEXT_LEN: usize = 255;

/// Decode latin-1 bytes into a string.
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode a string as latin-1 bytes.
///
/// Fails if any character falls outside latin-1 or if the encoded length
/// exceeds the single-byte length prefix. Never substitutes or truncates.
pub(crate) fn encode_latin1(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(CreditsError::TextNotLatin1 { ch });
        }
        out.push(code as u8);
    }
    if out.len() > MAX_TEXT_LEN {
        return Err(CreditsError::TextTooLong {
            len: out.len(),
            limit: MAX_TEXT_LEN,
        });
    }
    Ok(out)
}
