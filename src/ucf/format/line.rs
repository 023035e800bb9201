//! # Line Classification
//!
//! Splits one raw data line into tab-separated fields and classifies it by
//! the sigil leading its first field. No state is kept here: applying the
//! running codepoint offset is the store builder's job.
//!
//! ## Compact grammar
//! ```text
//! [START  END  TITLE  FILENAME  PDF_URL     block
//! &NAME   HEX                               entity (legacy)
//! [+N]["]  DESCRIPTION  [&name;][ALIAS]     assigned character
//! [+N]%    COUNT                            unassigned range
//! [+N]!    COUNT                            noncharacter range
//! [+N]^    COUNT                            surrogate range
//! [+N]*    COUNT                            private-use range
//! [+N]#    COUNT  TEMPLATE                  templated range
//! ```
//!
//! ## Tabular grammar
//! ```text
//! BLK  START  END  TITLE  FILENAME  PDF_URL
//! HEX  DESCRIPTION  [&name;][ALIAS]
//! ```

use crate::ucf::codec;
use crate::ucf::types::error::{Result, UcfError};
use crate::ucf::types::models::ReservedKind;

const BLOCK_SIGIL: char = '[';
const ENTITY_SIGIL: char = '&';
const OFFSET_SIGIL: char = '+';
const CHARACTER_SIGIL: char = '"';
const TABULAR_BLOCK_TAG: &str = "BLK";

/// Which grammar a data file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatVariant {
    /// Delta-encoded entries with type sigils.
    #[default]
    Compact,
    /// One line per character keyed by its absolute hex codepoint.
    Tabular,
}

impl FormatVariant {
    /// Detects the grammar from the first non-empty line of the data.
    pub fn detect(text: &str) -> Self {
        let first_field = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .find(|line| !line.is_empty())
            .and_then(|line| line.split('\t').next())
            .unwrap_or_default();
        if first_field == TABULAR_BLOCK_TAG || is_hex_code(first_field) {
            FormatVariant::Tabular
        } else {
            FormatVariant::Compact
        }
    }
}

fn is_hex_code(field: &str) -> bool {
    field.len() >= 4 && field.bytes().all(|b| b.is_ascii_hexdigit())
}

/// One classified data line, borrowing its fields from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Block {
        start_hex: &'a str,
        end_hex: &'a str,
        title: &'a str,
        filename: &'a str,
        pdf_url: &'a str,
    },
    Entity {
        name: &'a str,
        hex: &'a str,
    },
    Character {
        offset: u32,
        description: &'a str,
        /// Alias text, possibly led by an inline `&name;` entity reference.
        extra: Option<&'a str>,
    },
    Range {
        offset: u32,
        kind: ReservedKind,
        count: u32,
        template: Option<&'a str>,
    },
    /// Tabular-variant character with an absolute codepoint.
    Absolute {
        codepoint: u32,
        description: &'a str,
        extra: Option<&'a str>,
    },
}

/// Classifies a line of the compact grammar.
pub fn parse_compact(line_no: usize, text: &str) -> Result<Line<'_>> {
    let mut fields = text.split('\t');
    let head = fields.next().unwrap_or_default();

    if let Some(inline) = head.strip_prefix(BLOCK_SIGIL) {
        let start_hex = sigil_value(inline, &mut fields, line_no, "block start")?;
        return parse_block_fields(start_hex, &mut fields, line_no);
    }

    if let Some(inline) = head.strip_prefix(ENTITY_SIGIL) {
        let name = sigil_value(inline, &mut fields, line_no, "entity name")?;
        let hex = required(&mut fields, line_no, "entity codepoint")?;
        return Ok(Line::Entity { name, hex });
    }

    let (offset, rest) = split_offset(head, line_no)?;
    let mut chars = rest.chars();
    let sigil = chars.next().unwrap_or(CHARACTER_SIGIL);
    if !chars.as_str().is_empty() {
        return Err(UcfError::malformed(
            line_no,
            format!("unexpected text after type sigil: {:?}", chars.as_str()),
        ));
    }

    if sigil == CHARACTER_SIGIL {
        let description = required(&mut fields, line_no, "description")?;
        let extra = fields.next().filter(|field| !field.is_empty());
        return Ok(Line::Character { offset, description, extra });
    }

    let kind = ReservedKind::from_sigil(sigil)
        .ok_or(UcfError::UnsupportedLineKind { line: line_no, sigil })?;
    let count_field = required(&mut fields, line_no, "range count")?;
    let count = count_field
        .parse::<u32>()
        .ok()
        .filter(|&count| count > 0)
        .ok_or_else(|| {
            UcfError::malformed(line_no, format!("invalid range count: {:?}", count_field))
        })?;
    let template = if kind == ReservedKind::Templated {
        Some(required(&mut fields, line_no, "range template")?)
    } else {
        None
    };
    Ok(Line::Range { offset, kind, count, template })
}

/// Classifies a line of the tabular grammar.
pub fn parse_tabular(line_no: usize, text: &str) -> Result<Line<'_>> {
    let mut fields = text.split('\t');
    let head = fields.next().unwrap_or_default();

    if head == TABULAR_BLOCK_TAG {
        let start_hex = required(&mut fields, line_no, "block start")?;
        return parse_block_fields(start_hex, &mut fields, line_no);
    }

    let codepoint = codec::hex_to_dec(head).map_err(|_| match head.chars().next() {
        Some(sigil) if !sigil.is_ascii_hexdigit() => {
            UcfError::UnsupportedLineKind { line: line_no, sigil }
        }
        _ => UcfError::malformed(line_no, format!("invalid codepoint: {:?}", head)),
    })?;
    let description = required(&mut fields, line_no, "description")?;
    let extra = fields.next().filter(|field| !field.is_empty());
    Ok(Line::Absolute { codepoint, description, extra })
}

fn parse_block_fields<'a>(
    start_hex: &'a str,
    fields: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<Line<'a>> {
    let end_hex = required(fields, line_no, "block end")?;
    let title = required(fields, line_no, "block title")?;
    let filename = fields.next().unwrap_or_default();
    let pdf_url = fields.next().unwrap_or_default();
    Ok(Line::Block { start_hex, end_hex, title, filename, pdf_url })
}

/// Splits an optional leading `+<digits>` offset from the first field.
fn split_offset(head: &str, line_no: usize) -> Result<(u32, &str)> {
    let Some(after_plus) = head.strip_prefix(OFFSET_SIGIL) else {
        return Ok((1, head));
    };
    let digits_end = after_plus
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(after_plus.len());
    let (digits, rest) = after_plus.split_at(digits_end);
    let offset = digits
        .parse::<u32>()
        .ok()
        .filter(|&offset| offset > 0)
        .ok_or_else(|| UcfError::malformed(line_no, format!("invalid offset: {:?}", head)))?;
    Ok((offset, rest))
}

/// The value attached to a sigil: inline after it, or in the next field.
fn sigil_value<'a>(
    inline: &'a str,
    fields: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    what: &str,
) -> Result<&'a str> {
    if inline.is_empty() {
        required(fields, line_no, what)
    } else {
        Ok(inline)
    }
}

fn required<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    what: &str,
) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| UcfError::malformed(line_no, format!("missing {}", what)))
}
