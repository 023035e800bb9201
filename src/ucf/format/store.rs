//! # Character Data Store
//!
//! Expands the line-oriented data format into queryable structures in a
//! single pass. A store is built once per load and never mutated afterwards;
//! a failed parse publishes nothing.

use std::collections::HashMap;

use log::{info, trace, warn};
use regex::Regex;
use std::sync::OnceLock;

use super::line::{self, FormatVariant, Line};
use crate::ucf::codec::{self, MAX_CODEPOINT};
use crate::ucf::types::error::{Result, UcfError};
use crate::ucf::types::models::{Block, CodepointRecord, EntityAlias, ReservedKind, ReservedRange};

/// Matches an inline entity reference leading a character's alias field.
static ENTITY_REF_PATTERN: OnceLock<Regex> = OnceLock::new();

fn entity_ref_regex() -> &'static Regex {
    ENTITY_REF_PATTERN.get_or_init(|| Regex::new(r"^&(\w+);").expect("Invalid entity reference pattern"))
}

/// Parsed character data: assigned codepoints, reserved ranges, blocks and
/// entity names.
#[derive(Debug, Default)]
pub struct DataStore {
    /// Assigned characters keyed by integer codepoint.
    records: HashMap<u32, CodepointRecord>,
    /// Assigned codepoints in file order (ascending).
    codepoints: Vec<u32>,
    ranges: Vec<ReservedRange>,
    blocks: Vec<Block>,
    entities: Vec<EntityAlias>,
    entity_index: HashMap<String, usize>,
    entity_upper_index: HashMap<String, Vec<usize>>,
    max_codepoint: u32,
    variant: FormatVariant,
}

impl DataStore {
    /// Parses a complete data file. A leading byte order mark is ignored.
    ///
    /// # Errors
    /// Returns `UnsupportedLineKind` or `MalformedLine` for the first bad line;
    /// no partially built store escapes.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let variant = FormatVariant::detect(text);
        info!("Parsing character data ({:?} format, {} bytes)", variant, text.len());

        let mut builder = StoreBuilder::new(variant);
        for (idx, raw) in text.split('\n').enumerate() {
            let line_no = idx + 1;
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            if raw.is_empty() {
                continue;
            }
            let line = match variant {
                FormatVariant::Compact => line::parse_compact(line_no, raw)?,
                FormatVariant::Tabular => line::parse_tabular(line_no, raw)?,
            };
            trace!("Line {}: {:?}", line_no, line);
            builder.apply(line_no, line)?;
        }
        let store = builder.finish();

        info!(
            "Character data parsed: {} characters, {} reserved ranges, {} blocks, {} entities, max U+{}",
            store.codepoints.len(),
            store.ranges.len(),
            store.blocks.len(),
            store.entities.len(),
            codec::dec_to_hex(store.max_codepoint, 4)
        );
        Ok(store)
    }

    /// The assigned record for `cp`, if any.
    pub fn record(&self, cp: u32) -> Option<&CodepointRecord> {
        self.records.get(&cp)
    }

    /// Assigned codepoints in ascending order.
    pub fn codepoints(&self) -> &[u32] {
        &self.codepoints
    }

    /// Reserved ranges, ascending by first codepoint and non-overlapping.
    pub fn ranges(&self) -> &[ReservedRange] {
        &self.ranges
    }

    /// Blocks, ascending and non-overlapping.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn entities(&self) -> &[EntityAlias] {
        &self.entities
    }

    /// Exact (case-sensitive) entity name lookup.
    pub fn entity(&self, name: &str) -> Option<&EntityAlias> {
        self.entity_index.get(name).map(|&idx| &self.entities[idx])
    }

    /// All entities whose uppercased name equals `upper_name`.
    pub fn entities_by_upper(&self, upper_name: &str) -> impl Iterator<Item = &EntityAlias> {
        self.entity_upper_index
            .get(upper_name)
            .into_iter()
            .flatten()
            .map(|&idx| &self.entities[idx])
    }

    /// Highest codepoint mentioned by a character or range.
    pub fn max_codepoint(&self) -> u32 {
        self.max_codepoint
    }

    /// Number of assigned characters.
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }
}

/// Accumulates parsed lines, tracking the running codepoint.
struct StoreBuilder {
    store: DataStore,
    /// Running codepoint; starts before U+0000 so the first default offset lands on it.
    cursor: i64,
}

impl StoreBuilder {
    fn new(variant: FormatVariant) -> Self {
        Self {
            store: DataStore { variant, ..DataStore::default() },
            cursor: -1,
        }
    }

    fn apply(&mut self, line_no: usize, line: Line<'_>) -> Result<()> {
        match line {
            Line::Block { start_hex, end_hex, title, filename, pdf_url } => {
                self.add_block(line_no, start_hex, end_hex, title, filename, pdf_url)
            }
            Line::Entity { name, hex } => {
                let codepoint = codec::hex_to_dec(hex).map_err(|_| {
                    UcfError::malformed(line_no, format!("invalid entity codepoint: {:?}", hex))
                })?;
                self.add_entity(name, codepoint);
                Ok(())
            }
            Line::Character { offset, description, extra } => {
                let codepoint = self.advance(line_no, offset)?;
                let (entity_name, alias) = split_entity_ref(extra);
                if let Some(name) = entity_name {
                    self.add_entity(name, codepoint);
                }
                self.add_character(codepoint, description, alias, entity_name);
                Ok(())
            }
            Line::Range { offset, kind, count, template } => {
                let first_cp = self.advance(line_no, offset)?;
                let last_cp = self.checked_codepoint(line_no, first_cp as i64 + count as i64 - 1)?;
                self.cursor = last_cp as i64;
                self.note_codepoint(last_cp);
                self.store.ranges.push(ReservedRange {
                    kind,
                    first_cp,
                    last_cp,
                    template: template
                        .filter(|_| kind == ReservedKind::Templated)
                        .map(str::to_string),
                });
                Ok(())
            }
            Line::Absolute { codepoint, description, extra } => {
                if (codepoint as i64) <= self.cursor {
                    return Err(UcfError::malformed(
                        line_no,
                        format!("codepoint {:X} is not in ascending order", codepoint),
                    ));
                }
                let codepoint = self.checked_codepoint(line_no, codepoint as i64)?;
                self.cursor = codepoint as i64;
                let (entity_name, alias) = split_entity_ref(extra);
                if let Some(name) = entity_name {
                    self.add_entity(name, codepoint);
                }
                self.add_character(codepoint, description, alias, entity_name);
                Ok(())
            }
        }
    }

    /// Moves the running codepoint forward by `offset` and returns it.
    fn advance(&mut self, line_no: usize, offset: u32) -> Result<u32> {
        let codepoint = self.checked_codepoint(line_no, self.cursor + offset as i64)?;
        self.cursor = codepoint as i64;
        Ok(codepoint)
    }

    fn checked_codepoint(&self, line_no: usize, value: i64) -> Result<u32> {
        if !(0..=MAX_CODEPOINT as i64).contains(&value) {
            return Err(UcfError::malformed(
                line_no,
                format!("codepoint {:#X} is outside the Unicode range", value),
            ));
        }
        Ok(value as u32)
    }

    fn note_codepoint(&mut self, cp: u32) {
        self.store.max_codepoint = self.store.max_codepoint.max(cp);
    }

    fn add_character(
        &mut self,
        codepoint: u32,
        description: &str,
        alias: Option<&str>,
        entity_name: Option<&str>,
    ) {
        self.note_codepoint(codepoint);
        self.store.codepoints.push(codepoint);
        self.store.records.insert(
            codepoint,
            CodepointRecord {
                codepoint,
                description: description.to_string(),
                alias: alias.map(str::to_string),
                entity_name: entity_name.map(str::to_string),
            },
        );
    }

    fn add_block(
        &mut self,
        line_no: usize,
        start_hex: &str,
        end_hex: &str,
        title: &str,
        filename: &str,
        pdf_url: &str,
    ) -> Result<()> {
        let parse = |hex: &str| {
            codec::hex_to_dec(hex).map_err(|_| {
                UcfError::malformed(line_no, format!("invalid block bound: {:?}", hex))
            })
        };
        let start_dec = parse(start_hex)?;
        let end_dec = parse(end_hex)?;
        if start_dec > end_dec {
            return Err(UcfError::malformed(
                line_no,
                format!("block {} ends before it starts", title),
            ));
        }
        if let Some(prev) = self.store.blocks.last() {
            if start_dec <= prev.end_dec {
                return Err(UcfError::malformed(
                    line_no,
                    format!("block {} overlaps or precedes block {}", title, prev.title),
                ));
            }
        }
        self.store.blocks.push(Block {
            index: self.store.blocks.len(),
            start_hex: start_hex.to_string(),
            end_hex: end_hex.to_string(),
            start_dec,
            end_dec,
            title: title.to_string(),
            filename: filename.to_string(),
            pdf_url: pdf_url.to_string(),
        });
        Ok(())
    }

    fn add_entity(&mut self, name: &str, codepoint: u32) {
        if self.store.entity_index.contains_key(name) {
            warn!("Duplicate entity name {:?} ignored", name);
            return;
        }
        let idx = self.store.entities.len();
        let upper_name = name.to_uppercase();
        self.store.entity_index.insert(name.to_string(), idx);
        self.store
            .entity_upper_index
            .entry(upper_name.clone())
            .or_default()
            .push(idx);
        self.store.entities.push(EntityAlias {
            name: name.to_string(),
            upper_name,
            codepoint,
        });
    }

    /// Attaches entity names declared on separate lines to their records.
    fn finish(mut self) -> DataStore {
        let store = &mut self.store;
        for entity in &store.entities {
            if let Some(record) = store.records.get_mut(&entity.codepoint) {
                if record.entity_name.is_none() {
                    record.entity_name = Some(entity.name.clone());
                }
            }
        }
        self.store
    }
}

/// Splits a leading `&name;` reference from a character's alias field.
fn split_entity_ref(extra: Option<&str>) -> (Option<&str>, Option<&str>) {
    let Some(extra) = extra else {
        return (None, None);
    };
    match entity_ref_regex().captures(extra) {
        Some(caps) => {
            let name = caps.get(1).map(|m| m.as_str());
            let end = caps.get(0).map_or(0, |m| m.end());
            let alias = Some(extra[end..].trim()).filter(|rest| !rest.is_empty());
            (name, alias)
        }
        None => (None, Some(extra)),
    }
}
