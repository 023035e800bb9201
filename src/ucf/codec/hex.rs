use crate::ucf::types::error::{Result, UcfError};

/// Formats `n` as uppercase hex, zero-padded to at least `width` digits.
pub fn dec_to_hex(n: u32, width: usize) -> String {
    format!("{:0width$X}", n, width = width)
}

/// Parses a hex string (either case, no prefix) into an integer.
pub fn hex_to_dec(s: &str) -> Result<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(UcfError::InvalidHex(s.to_string()));
    }
    u32::from_str_radix(s, 16).map_err(|_| UcfError::InvalidHex(s.to_string()))
}
