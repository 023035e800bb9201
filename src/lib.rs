//! # unicode-char-finder
//!
//! Unicode character lookup engine: parses a compact, delta-encoded character
//! data file and answers questions about codepoints.
//!
//! - Exact lookup of assigned characters and reserved ranges
//! - Incremental substring, regex and reference ("U+263A", "&#9786;",
//!   "E2 98 BA", "&hearts;") search with pagination
//! - Codepoint to block resolution
//! - Stepping between characters and paging through an 8x16 code chart
//! - UTF-8 / UTF-16 encoding helpers
pub mod ucf;

// Re-export the main types for convenience
pub use ucf::{
    codec,
    iter::Batches,
    types::models::{
        Block, CellClass, CharInfo, CharacterRecord, ChartCell, ChartPage, CodepointRecord,
        Direction, DisplayMatch, EntityAlias, ReservedKind, ReservedRange, ReservedRecord,
        SearchBatch,
    },
    CharFinder, DataStore, FinderOptions, LoadState, Result, SearchMode, SearchSession, UcfError,
};
