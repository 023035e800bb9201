//! Core data structures for the character data model.
//!
//! This module defines the fundamental types used throughout the library:
//! - Assigned codepoint records, reserved ranges and blocks
//! - Entity aliases
//! - Lookup results, search matches and code chart cells

use crate::ucf::codec;

/// Number of rows in a code chart page.
pub const CHART_ROWS: usize = 8;
/// Number of columns in a code chart page.
pub const CHART_COLUMNS: usize = 16;
/// Number of codepoints covered by one code chart page.
pub const CHART_PAGE_SIZE: u32 = (CHART_ROWS * CHART_COLUMNS) as u32;
/// Mask aligning a codepoint to the start of its chart page.
pub const CHART_PAGE_MASK: u32 = !(CHART_PAGE_SIZE - 1);

/// An individually assigned character parsed from the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRecord {
    pub codepoint: u32,
    pub description: String,
    pub alias: Option<String>,
    /// Name of an HTML entity resolving to this codepoint, if one was declared.
    pub entity_name: Option<String>,
}

impl CodepointRecord {
    /// Fixed-width (at least 4 digits) uppercase hex form of the codepoint.
    pub fn hex(&self) -> String {
        codec::dec_to_hex(self.codepoint, 4)
    }

    /// Case-insensitive containment test against description or alias.
    ///
    /// `needle` must already be uppercased.
    pub fn contains_upper(&self, needle: &str) -> bool {
        self.description.to_uppercase().contains(needle)
            || self
                .alias
                .as_deref()
                .is_some_and(|alias| alias.to_uppercase().contains(needle))
    }
}

/// Classification of a reserved range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKind {
    Unassigned,
    Noncharacter,
    Surrogate,
    PrivateUse,
    /// A range whose descriptions are generated from a template (e.g. CJK ideographs).
    Templated,
}

impl ReservedKind {
    /// Short lowercase name, also used as the semantic class of chart cells.
    pub fn name(&self) -> &'static str {
        match self {
            ReservedKind::Unassigned => "unassigned",
            ReservedKind::Noncharacter => "noncharacter",
            ReservedKind::Surrogate => "surrogate",
            ReservedKind::PrivateUse => "private-use",
            ReservedKind::Templated => "templated",
        }
    }

    /// Whether a glyph for codepoints of this kind is worth displaying.
    pub fn show(&self) -> bool {
        match self {
            ReservedKind::Unassigned | ReservedKind::PrivateUse | ReservedKind::Templated => true,
            ReservedKind::Noncharacter | ReservedKind::Surrogate => false,
        }
    }

    /// Human-readable description for the fixed kinds.
    ///
    /// Templated ranges synthesize their description instead.
    pub fn fixed_description(&self) -> Option<&'static str> {
        match self {
            ReservedKind::Unassigned => Some("Unassigned code point"),
            ReservedKind::Noncharacter => Some("Noncharacter"),
            ReservedKind::Surrogate => Some("Surrogate code point"),
            ReservedKind::PrivateUse => Some("Private use character"),
            ReservedKind::Templated => None,
        }
    }

    /// Maps a range type sigil from the data file to its kind.
    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '%' => Some(Self::Unassigned),
            '!' => Some(Self::Noncharacter),
            '^' => Some(Self::Surrogate),
            '*' => Some(Self::PrivateUse),
            '#' => Some(Self::Templated),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A contiguous span of codepoints with no individually assigned characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedRange {
    pub kind: ReservedKind,
    pub first_cp: u32,
    pub last_cp: u32,
    /// Description template for `Templated` ranges.
    pub template: Option<String>,
}

impl ReservedRange {
    pub fn contains(&self, cp: u32) -> bool {
        self.first_cp <= cp && cp <= self.last_cp
    }

    /// Number of codepoints in the range.
    pub fn span(&self) -> u32 {
        self.last_cp - self.first_cp + 1
    }
}

/// A named Unicode block with its reference chart document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub start_hex: String,
    pub end_hex: String,
    pub start_dec: u32,
    pub end_dec: u32,
    pub title: String,
    pub filename: String,
    pub pdf_url: String,
}

impl Block {
    pub fn contains(&self, cp: u32) -> bool {
        self.start_dec <= cp && cp <= self.end_dec
    }
}

/// An HTML entity name resolving to a codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityAlias {
    pub name: String,
    pub upper_name: String,
    pub codepoint: u32,
}

/// Description synthesized for a codepoint inside a reserved range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedRecord {
    pub codepoint: u32,
    pub kind: ReservedKind,
    pub description: String,
    pub show: bool,
    pub template: Option<String>,
    /// Bounds of the containing range.
    pub first_cp: u32,
    pub last_cp: u32,
}

/// The result of looking up a single codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterRecord<'a> {
    Assigned(&'a CodepointRecord),
    Reserved(ReservedRecord),
}

impl<'a> CharacterRecord<'a> {
    pub fn codepoint(&self) -> u32 {
        match self {
            CharacterRecord::Assigned(rec) => rec.codepoint,
            CharacterRecord::Reserved(rec) => rec.codepoint,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CharacterRecord::Assigned(rec) => &rec.description,
            CharacterRecord::Reserved(rec) => &rec.description,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        match self {
            CharacterRecord::Assigned(rec) => rec.alias.as_deref(),
            CharacterRecord::Reserved(_) => None,
        }
    }

    pub fn entity_name(&self) -> Option<&str> {
        match self {
            CharacterRecord::Assigned(rec) => rec.entity_name.as_deref(),
            CharacterRecord::Reserved(_) => None,
        }
    }

    /// Assigned characters are always visible; reserved ones depend on their kind.
    pub fn is_visible(&self) -> bool {
        match self {
            CharacterRecord::Assigned(_) => true,
            CharacterRecord::Reserved(rec) => rec.show,
        }
    }

    pub fn reserved_kind(&self) -> Option<ReservedKind> {
        match self {
            CharacterRecord::Assigned(_) => None,
            CharacterRecord::Reserved(rec) => Some(rec.kind),
        }
    }
}

/// A fully formed search result, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMatch {
    pub codepoint: u32,
    pub character: String,
    pub hex: String,
    pub description: String,
    pub alias: Option<String>,
    /// Explains an exact match, e.g. `Decimal: 65` or `&amp;`.
    pub prefix: Option<String>,
}

impl DisplayMatch {
    pub(crate) fn new(record: &CharacterRecord<'_>, prefix: Option<String>) -> Self {
        let codepoint = record.codepoint();
        Self {
            codepoint,
            character: codec::display_string(codepoint),
            hex: codec::dec_to_hex(codepoint, 4),
            description: record.description().to_string(),
            alias: record.alias().map(str::to_string),
            prefix,
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBatch {
    pub matches: Vec<DisplayMatch>,
    pub done: bool,
}

/// Direction of travel for stepping operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn delta(&self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Semantic class of a code chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Assigned,
    /// No record at all covers the codepoint.
    Unassigned,
    Reserved(ReservedKind),
}

impl CellClass {
    /// Class name for non-assigned cells; `None` for ordinary characters.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            CellClass::Assigned => None,
            CellClass::Unassigned => Some("unassigned"),
            CellClass::Reserved(kind) => Some(kind.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartCell {
    pub codepoint: u32,
    pub visible: bool,
    pub class: CellClass,
    /// Set on the cell of the character a chart was opened for.
    pub current: bool,
}

/// An 8x16 window of the code chart, starting at a 128-aligned codepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPage {
    pub base: u32,
    pub rows: [[ChartCell; CHART_COLUMNS]; CHART_ROWS],
}

impl ChartPage {
    /// Resolves a grid position back to its codepoint.
    pub fn codepoint_at(&self, row: usize, col: usize) -> Option<u32> {
        if row >= CHART_ROWS || col >= CHART_COLUMNS {
            return None;
        }
        Some(self.base + (row * CHART_COLUMNS + col) as u32)
    }

    pub fn cells(&self) -> impl Iterator<Item = &ChartCell> {
        self.rows.iter().flatten()
    }
}

/// Everything known about a single character, for a properties panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInfo<'a> {
    pub codepoint: u32,
    /// `U+` followed by the 4-digit-minimum hex code.
    pub code: String,
    pub character: String,
    pub description: Option<String>,
    pub alias: Option<String>,
    pub reserved_kind: Option<ReservedKind>,
    /// Numeric character reference, e.g. `&#65;`.
    pub html_entity: String,
    /// Named character reference, e.g. `&amp;`, when one is declared.
    pub named_entity: Option<String>,
    pub utf8_hex: String,
    pub utf16_hex: String,
    pub block: Option<&'a Block>,
}
