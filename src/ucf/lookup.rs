//! Codepoint lookup over a parsed [`DataStore`].
//!
//! Assigned characters are found by key. Everything else is resolved against
//! the sorted reserved ranges, so a codepoint yields at most one record.

use crate::ucf::codec;
use crate::ucf::format::DataStore;
use crate::ucf::types::models::{Block, CharacterRecord, ReservedKind, ReservedRange, ReservedRecord};

/// Placeholder in templated range descriptions replaced by the hex codepoint.
pub const TEMPLATE_MARKER: &str = "#";

/// Returns the record for `cp`: assigned, synthesized from a reserved range,
/// or `None` when nothing in the data covers it.
pub fn lookup(store: &DataStore, cp: u32) -> Option<CharacterRecord<'_>> {
    if let Some(record) = store.record(cp) {
        return Some(CharacterRecord::Assigned(record));
    }
    reserved_range(store, cp).map(|range| CharacterRecord::Reserved(reserved_record(range, cp)))
}

/// Finds the reserved range containing `cp`.
///
/// Ranges are sorted and disjoint: the first range not ending before `cp`
/// is the only candidate.
pub fn reserved_range(store: &DataStore, cp: u32) -> Option<&ReservedRange> {
    let ranges = store.ranges();
    let idx = ranges.partition_point(|range| range.last_cp < cp);
    ranges.get(idx).filter(|range| range.contains(cp))
}

/// Resolves `cp` to the block it belongs to, if any.
pub fn block_from_codepoint(store: &DataStore, cp: u32) -> Option<&Block> {
    let blocks = store.blocks();
    let idx = blocks.partition_point(|block| block.end_dec < cp);
    blocks.get(idx).filter(|block| block.contains(cp))
}

fn reserved_record(range: &ReservedRange, cp: u32) -> ReservedRecord {
    let description = match (range.kind, range.template.as_deref()) {
        (ReservedKind::Templated, Some(template)) => {
            template.replace(TEMPLATE_MARKER, &codec::dec_to_hex(cp, 4))
        }
        (kind, _) => kind.fixed_description().unwrap_or_default().to_string(),
    };
    ReservedRecord {
        codepoint: cp,
        kind: range.kind,
        description,
        show: range.kind.show(),
        template: range.template.clone(),
        first_cp: range.first_cp,
        last_cp: range.last_cp,
    }
}
