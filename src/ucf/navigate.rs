//! Moving around the codepoint space: single steps, block jumps and code
//! chart pages.

use crate::ucf::format::DataStore;
use crate::ucf::lookup::{block_from_codepoint, lookup};
use crate::ucf::types::models::{
    CellClass, CharacterRecord, ChartCell, ChartPage, Direction, CHART_COLUMNS, CHART_PAGE_MASK,
    CHART_PAGE_SIZE,
};

/// Steps from `current` to the adjacent displayable codepoint.
///
/// Hidden reserved ranges (surrogates, noncharacters) are crossed in one jump
/// to their far boundary; codepoints without any record are passed over.
/// Stepping back from U+0000 clears the selection (`None`). Running off either
/// end of the data leaves the position unchanged.
pub fn step(store: &DataStore, current: u32, direction: Direction) -> Option<u32> {
    let delta = direction.delta();
    if current as i64 + delta == -1 {
        return None;
    }
    let max = store.max_codepoint() as i64;
    let mut pos = current as i64;
    loop {
        let candidate = pos + delta;
        if candidate < 0 || candidate > max {
            return Some(current);
        }
        match lookup(store, candidate as u32) {
            Some(record) if record.is_visible() => return Some(candidate as u32),
            Some(CharacterRecord::Reserved(range)) => {
                let boundary = match direction {
                    Direction::Backward => range.first_cp,
                    Direction::Forward => range.last_cp,
                };
                pos = boundary as i64;
            }
            _ => pos = candidate,
        }
    }
}

/// Moves to the start of the block before or after the one containing `current`.
///
/// Returns `current` unchanged when it is in no block or there is no
/// neighbouring block in that direction.
pub fn block_step(store: &DataStore, current: u32, direction: Direction) -> u32 {
    let Some(block) = block_from_codepoint(store, current) else {
        return current;
    };
    let target = match direction {
        Direction::Backward => block.index.checked_sub(1),
        Direction::Forward => Some(block.index + 1),
    };
    target
        .and_then(|idx| store.blocks().get(idx))
        .map_or(current, |block| block.start_dec)
}

/// Builds the 8x16 chart page containing `base`.
pub fn page_window(store: &DataStore, base: u32) -> ChartPage {
    let start = base & CHART_PAGE_MASK;
    let rows = std::array::from_fn(|row| {
        std::array::from_fn(|col| chart_cell(store, start + (row * CHART_COLUMNS + col) as u32))
    });
    ChartPage { base: start, rows }
}

/// Builds the chart page containing `cp` with its cell marked current.
pub fn chart_for(store: &DataStore, cp: u32) -> ChartPage {
    let mut page = page_window(store, cp);
    let offset = (cp - page.base) as usize;
    page.rows[offset / CHART_COLUMNS][offset % CHART_COLUMNS].current = true;
    page
}

/// Shifts a page base by `incr` pages. A target outside `u32` leaves `base`
/// unchanged.
pub fn page_step(base: u32, incr: i32) -> u32 {
    let target = base as i64 + incr as i64 * CHART_PAGE_SIZE as i64;
    u32::try_from(target).unwrap_or(base)
}

fn chart_cell(store: &DataStore, codepoint: u32) -> ChartCell {
    let (visible, class) = match lookup(store, codepoint) {
        None => (false, CellClass::Unassigned),
        Some(CharacterRecord::Assigned(_)) => (true, CellClass::Assigned),
        Some(CharacterRecord::Reserved(record)) => (record.show, CellClass::Reserved(record.kind)),
    };
    ChartCell { codepoint, visible, class, current: false }
}
