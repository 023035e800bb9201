//! UTF-8 byte display and decoding of hex byte sequences typed by a user.

use log::trace;

use super::{dec_to_hex, MAX_CODEPOINT, UNKNOWN};

/// Smallest codepoint that needs a sequence of each length.
const MIN_FOR_LENGTH: [u32; 4] = [0, 0x80, 0x800, 0x10000];

/// Encodes a codepoint as UTF-8 and renders the bytes as space-separated hex
/// pairs, e.g. `E2 82 AC`.
///
/// Surrogate codepoints are encoded with the plain 3-byte bit layout.
pub fn to_utf8_hex(cp: u32) -> String {
    let bytes: Vec<u32> = if cp < 0x80 {
        vec![cp]
    } else if cp < 0x800 {
        vec![0xC0 | (cp >> 6), 0x80 | (cp & 0x3F)]
    } else if cp < 0x10000 {
        vec![
            0xE0 | (cp >> 12),
            0x80 | ((cp >> 6) & 0x3F),
            0x80 | (cp & 0x3F),
        ]
    } else if cp <= MAX_CODEPOINT {
        vec![
            0xF0 | (cp >> 18),
            0x80 | ((cp >> 12) & 0x3F),
            0x80 | ((cp >> 6) & 0x3F),
            0x80 | (cp & 0x3F),
        ]
    } else {
        return UNKNOWN.to_string();
    };
    bytes
        .into_iter()
        .map(|byte| dec_to_hex(byte, 2))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes a string of hex byte pairs (whitespace ignored) holding exactly one
/// UTF-8 encoded character.
///
/// Returns `None` for anything that is not such a sequence: odd digit counts,
/// non-hex characters, bad lead bytes, missing or malformed continuation bytes,
/// trailing extra bytes, overlong forms and values above U+10FFFF.
pub fn utf8_hex_to_codepoint(s: &str) -> Option<u32> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = ::hex::decode(&digits).ok()?;
    let (&lead, rest) = bytes.split_first()?;

    let (len, mut cp) = if lead & 0x80 == 0 {
        (1, lead as u32)
    } else if lead & 0xE0 == 0xC0 {
        (2, (lead & 0x1F) as u32)
    } else if lead & 0xF0 == 0xE0 {
        (3, (lead & 0x0F) as u32)
    } else if lead & 0xF8 == 0xF0 {
        (4, (lead & 0x07) as u32)
    } else {
        trace!("Not a UTF-8 lead byte: {:#04x}", lead);
        return None;
    };

    if rest.len() != len - 1 {
        return None;
    }
    for &byte in rest {
        if byte & 0xC0 != 0x80 {
            return None;
        }
        cp = (cp << 6) | (byte & 0x3F) as u32;
    }
    if cp < MIN_FOR_LENGTH[len - 1] || cp > MAX_CODEPOINT {
        trace!("Overlong or out-of-range UTF-8 sequence: {:?}", s);
        return None;
    }
    Some(cp)
}
