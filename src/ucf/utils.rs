//! Text decoding helpers for the raw data file.

use encoding_rs::{Encoding, UTF_8};
use log::{debug, warn};

use crate::ucf::types::error::{Result, UcfError};

/// Resolves an encoding label such as `"utf-8"` or `"windows-1252"`.
pub fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| UcfError::UnknownEncoding(label.to_string()))
}

/// Decodes raw data file bytes to text.
///
/// A byte order mark takes precedence over `encoding`, which defaults to
/// UTF-8. Malformed sequences are replaced rather than rejected.
pub fn decode_text(bytes: &[u8], encoding: Option<&str>) -> Result<String> {
    let fallback = match encoding {
        Some(label) => parse_encoding(label)?,
        None => UTF_8,
    };
    let (text, used, had_errors) = fallback.decode(bytes);
    debug!("Decoded {} bytes of character data as {}", bytes.len(), used.name());
    if had_errors {
        warn!("Character data contained malformed {} sequences", used.name());
    }
    Ok(text.into_owned())
}
