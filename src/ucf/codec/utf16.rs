//! UTF-16 code unit handling.
//!
//! Characters outside the Basic Multilingual Plane travel as surrogate pairs.
//! The decoding direction deliberately does not validate the trailing unit.

use super::{dec_to_hex, MAX_CODEPOINT, UNKNOWN};

const SURROGATE_MASK: u16 = 0xF800;
const HIGH_SURROGATE_START: u16 = 0xD800;
const LOW_SURROGATE_START: u16 = 0xDC00;

fn is_high_surrogate(unit: u16) -> bool {
    unit & SURROGATE_MASK == HIGH_SURROGATE_START
}

/// Encodes a codepoint as one UTF-16 code unit, or a surrogate pair above U+FFFF.
pub fn codepoint_to_utf16(cp: u32) -> Vec<u16> {
    if cp < 0x10000 {
        return vec![cp as u16];
    }
    let offset = cp - 0x10000;
    let hi = (offset / 0x400) as u16 + HIGH_SURROGATE_START;
    let lo = (offset % 0x400) as u16 + LOW_SURROGATE_START;
    vec![hi, lo]
}

/// Decodes the first character of a UTF-16 unit sequence.
///
/// Returns `None` for an empty sequence. A high surrogate is combined with
/// whatever unit follows it; a lone trailing high surrogate is returned as is.
pub fn utf16_to_codepoint(units: &[u16]) -> Option<u32> {
    let hi = *units.first()?;
    if !is_high_surrogate(hi) {
        return Some(hi as u32);
    }
    let Some(&lo) = units.get(1) else {
        return Some(hi as u32);
    };
    // 0x10000 + lo never underflows the 0xDC00 subtraction.
    let high_bits = ((hi - HIGH_SURROGATE_START) as u32) << 10;
    Some(high_bits + 0x10000 + lo as u32 - LOW_SURROGATE_START as u32)
}

/// Codepoint of the first character of `s`.
pub fn str_to_codepoint(s: &str) -> Option<u32> {
    let units: Vec<u16> = s.encode_utf16().take(2).collect();
    utf16_to_codepoint(&units)
}

/// Renders a codepoint as a string, substituting U+FFFD for surrogates and
/// out-of-range values which Rust strings cannot hold.
pub fn display_string(cp: u32) -> String {
    char::from_u32(cp)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

/// Space-separated UTF-16 code units in hex, e.g. `D83D DE00`.
pub fn to_utf16_hex(cp: u32) -> String {
    if cp > MAX_CODEPOINT {
        return UNKNOWN.to_string();
    }
    codepoint_to_utf16(cp)
        .into_iter()
        .map(|unit| dec_to_hex(unit as u32, 4))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The final character of a unit sequence: two units when they form a
/// surrogate pair, otherwise one.
pub fn last_character(units: &[u16]) -> &[u16] {
    let len = units.len();
    if len > 1 && is_high_surrogate(units[len - 2]) {
        &units[len - 2..]
    } else if len > 0 {
        &units[len - 1..]
    } else {
        units
    }
}
