//! Codec layer for numeric and encoding conversions.
//!
//! Stateless helpers shared by the data store, search and the CLI.
//!
//! # Submodules
//!
//! - [`hex`][]: Fixed-width hex formatting and parsing
//! - [`utf16`][]: Codepoint to UTF-16 code unit conversion (surrogate pairs)
//! - [`utf8`][]: UTF-8 byte display and hex byte sequence decoding

pub mod hex;
pub mod utf16;
pub mod utf8;

pub use self::hex::{dec_to_hex, hex_to_dec};
pub use self::utf16::{
    codepoint_to_utf16, display_string, last_character, str_to_codepoint, to_utf16_hex,
    utf16_to_codepoint,
};
pub use self::utf8::{to_utf8_hex, utf8_hex_to_codepoint};

/// Display text for codepoints beyond the Unicode range.
pub const UNKNOWN: &str = "unknown";

/// Highest valid Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;
