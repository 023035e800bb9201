mod common;

use unicode_char_finder::ucf::navigate;
use unicode_char_finder::{CellClass, CharFinder, Direction, FinderOptions, ReservedKind};

use common::fixture_finder;

fn inline_finder(data: &str) -> CharFinder {
    CharFinder::from_text(data, FinderOptions::default()).expect("inline data parses")
}

#[test]
fn step_moves_to_neighbouring_characters() {
    let finder = fixture_finder();
    // U+001F is unassigned but displayable.
    assert_eq!(finder.step(0x20, Direction::Backward), Some(0x1F));
    assert_eq!(finder.step(0x20, Direction::Forward), Some(0x21));
    // U+0023..U+0025 have no record at all and are passed over.
    assert_eq!(finder.step(0x22, Direction::Forward), Some(0x26));
    assert_eq!(finder.step(0x26, Direction::Backward), Some(0x22));
    assert_eq!(finder.step(0x20000, Direction::Forward), Some(0x20001));
}

#[test]
fn stepping_back_from_zero_clears_the_selection() {
    let finder = fixture_finder();
    assert_eq!(finder.step(0, Direction::Backward), None);
    assert_eq!(finder.step(0, Direction::Forward), Some(1));
}

#[test]
fn stepping_past_the_data_leaves_position_unchanged() {
    let finder = fixture_finder();
    let max = finder.store().max_codepoint();
    assert_eq!(max, 0x2A6DF);
    assert_eq!(finder.step(max, Direction::Forward), Some(max));
}

#[test]
fn hidden_ranges_are_crossed_in_one_step() {
    let finder = fixture_finder();
    // Surrogates are hidden; private use is shown.
    assert_eq!(finder.step(0x2665, Direction::Forward), Some(0xE000));
    assert_eq!(finder.step(0xE000, Direction::Backward), Some(0x2665));
    // Noncharacters around U+FFFD.
    assert_eq!(finder.step(0xFDCF, Direction::Forward), Some(0xFFFD));
    assert_eq!(finder.step(0xFFFD, Direction::Forward), Some(0x1F408));
    assert_eq!(finder.step(0xFFFD, Direction::Backward), Some(0xF8FF));
}

#[test]
fn adjacent_hidden_ranges_are_skipped_together() {
    let finder = inline_finder("\tA\n!\t5\n\tB\n");
    assert_eq!(finder.store().codepoints(), &[0, 6]);
    assert_eq!(finder.step(0, Direction::Forward), Some(6));
    assert_eq!(finder.step(5, Direction::Forward), Some(6));
    assert_eq!(finder.step(6, Direction::Backward), Some(0));

    let finder = inline_finder("\tA\n!\t3\n^\t3\n\tB\n");
    assert_eq!(finder.store().codepoints(), &[0, 7]);
    assert_eq!(finder.step(0, Direction::Forward), Some(7));
    assert_eq!(finder.step(7, Direction::Backward), Some(0));
}

#[test]
fn step_never_lands_on_hidden_codepoints() {
    let finder = fixture_finder();
    let mut cp = 0;
    let mut visited = 0;
    while let Some(next) = finder.step(cp, Direction::Forward) {
        if next == cp {
            break;
        }
        let record = finder.lookup(next).expect("step lands on a known codepoint");
        assert!(record.is_visible(), "U+{:04X} is hidden", next);
        assert!(next > cp);
        cp = next;
        visited += 1;
    }
    assert_eq!(cp, 0x2A6DF);
    assert!(visited > 0);
}

#[test]
fn block_step_jumps_between_blocks() {
    let finder = fixture_finder();
    assert_eq!(finder.block_step(0x41, Direction::Forward), 0x80);
    assert_eq!(finder.block_step(0x20AC, Direction::Backward), 0x2000);
    assert_eq!(finder.block_step(0x1F639, Direction::Forward), 0x20000);

    // No neighbouring block.
    assert_eq!(finder.block_step(0x41, Direction::Backward), 0x41);
    assert_eq!(finder.block_step(0x20001, Direction::Forward), 0x20001);
    // Not inside any block.
    assert_eq!(finder.block_step(0x3000, Direction::Forward), 0x3000);
}

#[test]
fn page_window_aligns_and_classifies_cells() {
    let finder = fixture_finder();
    let page = finder.page_window(0x41);
    assert_eq!(page.base, 0);
    assert_eq!(page.cells().count(), 128);
    assert!(page.cells().all(|cell| !cell.current));

    let control = &page.rows[0][5];
    assert_eq!(control.codepoint, 0x05);
    assert_eq!(control.class, CellClass::Reserved(ReservedKind::Unassigned));
    assert!(control.visible);

    let gap = &page.rows[2][3];
    assert_eq!(gap.codepoint, 0x23);
    assert_eq!(gap.class, CellClass::Unassigned);
    assert!(!gap.visible);
    assert_eq!(gap.class.name(), Some("unassigned"));

    let letter = &page.rows[4][1];
    assert_eq!(letter.codepoint, 0x41);
    assert_eq!(letter.class, CellClass::Assigned);
    assert!(letter.visible);
    assert_eq!(letter.class.name(), None);

    let surrogates = finder.page_window(0xD8A5);
    assert_eq!(surrogates.base, 0xD880);
    assert!(surrogates
        .cells()
        .all(|cell| cell.class == CellClass::Reserved(ReservedKind::Surrogate) && !cell.visible));

    let private = finder.page_window(0xE000);
    assert_eq!(private.rows[0][0].class.name(), Some("private-use"));
    assert!(private.rows[7][15].visible);
}

#[test]
fn chart_marks_the_current_character() {
    let finder = fixture_finder();
    let page = finder.chart_for(0x41);
    assert!(page.rows[4][1].current);
    assert_eq!(page.cells().filter(|cell| cell.current).count(), 1);
    assert_eq!(page.codepoint_at(4, 1), Some(0x41));
    assert_eq!(page.codepoint_at(7, 15), Some(0x7F));
    assert_eq!(page.codepoint_at(8, 0), None);
    assert_eq!(page.codepoint_at(0, 16), None);

    let page = finder.chart_for(0x1F639);
    assert_eq!(page.base, 0x1F600);
    assert!(page.rows[3][9].current);
}

#[test]
fn page_step_pages_through_the_chart() {
    let finder = fixture_finder();
    let first = finder.page_window(0);
    let second = finder.page_window(128);

    assert_eq!(finder.page_step(&first, -1).base, 0, "cannot page before U+0000");
    assert_eq!(finder.page_step(&second, -1).base, 0);
    assert_eq!(finder.page_step(&first, 1).base, 128);
    assert_eq!(finder.page_step(&second, -2).base, 128);
    assert_eq!(finder.page_step(&first, 3).base, 384);
}

#[test]
fn page_step_refuses_to_wrap_past_u32() {
    assert_eq!(navigate::page_step(0xFFFF_FF80, 1), 0xFFFF_FF80);
    assert_eq!(navigate::page_step(0xFFFF_FF00, 1), 0xFFFF_FF80);
    assert_eq!(navigate::page_step(0, i32::MIN), 0);
}
