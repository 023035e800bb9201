//! Incremental, resumable character search.
//!
//! A [`SearchSession`] is created per query string. It first yields "exact"
//! matches, where the query is read as a structured reference (decimal or hex
//! codepoint, UTF-8 bytes, entity name). After that it scans the assigned
//! codepoints from a saved cursor, so each [`SearchSession::advance`] call does
//! a bounded amount of work. Results never repeat within a session.

use std::collections::{HashSet, VecDeque};
use std::sync::OnceLock;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::ucf::codec;
use crate::ucf::format::DataStore;
use crate::ucf::lookup;
use crate::ucf::types::error::Result;
use crate::ucf::types::models::{CharacterRecord, CodepointRecord, DisplayMatch, SearchBatch};

/// Number of matches returned by one `advance` call unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 10;

static DECIMAL_PATTERN: OnceLock<Regex> = OnceLock::new();
static HEX_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `&#65;`, `&#65` or `65`.
fn decimal_regex() -> &'static Regex {
    DECIMAL_PATTERN
        .get_or_init(|| Regex::new(r"^(?:&#(\d+);?|(\d+))$").expect("Invalid decimal reference pattern"))
}

/// `&#x41;`, `&#x41`, `U+0041` or `41`.
fn hex_regex() -> &'static Regex {
    HEX_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(?:&#x([0-9a-f]+);?|(?:U\+)?([0-9a-f]+))$")
            .expect("Invalid hex reference pattern")
    })
}

/// How a query is matched against character descriptions.
#[derive(Debug, Clone)]
pub enum SearchMode {
    /// Case-insensitive containment; holds the uppercased query.
    Substring(String),
    /// Case-insensitive regular expression, from a `/pattern/` query.
    Regex(Regex),
}

impl SearchMode {
    /// Picks the mode for a query: `/.../` (at least 3 chars) is a regex.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the regex does not compile.
    pub fn for_query(query: &str) -> Result<Self> {
        if query.len() >= 3 && query.starts_with('/') && query.ends_with('/') {
            let pattern = &query[1..query.len() - 1];
            let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
            return Ok(SearchMode::Regex(regex));
        }
        Ok(SearchMode::Substring(query.to_uppercase()))
    }

    pub fn matches(&self, record: &CodepointRecord) -> bool {
        match self {
            SearchMode::Substring(upper) => record.contains_upper(upper),
            SearchMode::Regex(regex) => {
                regex.is_match(&record.description)
                    || record.alias.as_deref().is_some_and(|alias| regex.is_match(alias))
            }
        }
    }
}

/// State of one search: the query, the scan cursor and what was already emitted.
#[derive(Debug)]
pub struct SearchSession<'a> {
    store: &'a DataStore,
    query: String,
    mode: SearchMode,
    /// Index into the store's assigned codepoint list.
    cursor: usize,
    seen: HashSet<u32>,
    exact: VecDeque<DisplayMatch>,
    batch_size: usize,
    done: bool,
}

impl<'a> SearchSession<'a> {
    /// Starts a session for `query`.
    ///
    /// Returns `Ok(None)` for an empty query.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for a `/regex/` query that does not compile.
    pub fn start(store: &'a DataStore, query: &str, batch_size: usize) -> Result<Option<Self>> {
        if query.is_empty() {
            return Ok(None);
        }
        let mode = SearchMode::for_query(query)?;
        let exact = match mode {
            SearchMode::Substring(_) => exact_matches(store, query),
            SearchMode::Regex(_) => VecDeque::new(),
        };
        debug!(
            "Search started for {:?}: {} exact match(es), regex={}",
            query,
            exact.len(),
            matches!(mode, SearchMode::Regex(_))
        );
        Ok(Some(Self {
            store,
            query: query.to_string(),
            mode,
            cursor: 0,
            seen: HashSet::new(),
            exact,
            batch_size: batch_size.max(1),
            done: false,
        }))
    }

    /// Pulls the next batch of up to `batch_size` matches.
    ///
    /// The batch reports `done` as soon as the exact queue is drained and the
    /// scan cursor has reached the end; further calls return empty batches.
    pub fn advance(&mut self) -> SearchBatch {
        let mut matches = Vec::with_capacity(self.batch_size);
        while matches.len() < self.batch_size {
            match self.next_match() {
                Some(found) => matches.push(found),
                None => break,
            }
        }
        if self.exact.is_empty() && self.cursor >= self.store.codepoints().len() {
            self.done = true;
        }
        debug!(
            "Search {:?}: batch of {} at cursor {}/{}, done={}",
            self.query,
            matches.len(),
            self.cursor,
            self.store.codepoints().len(),
            self.done
        );
        SearchBatch { matches, done: self.done }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Produces the next unseen match: queued exact matches first, then the scan.
    pub(crate) fn next_match(&mut self) -> Option<DisplayMatch> {
        if self.done {
            return None;
        }
        while let Some(found) = self.exact.pop_front() {
            if self.seen.insert(found.codepoint) {
                return Some(found);
            }
        }

        let codepoints = self.store.codepoints();
        while self.cursor < codepoints.len() {
            let cp = codepoints[self.cursor];
            self.cursor += 1;
            if self.seen.contains(&cp) {
                continue;
            }
            let Some(record) = self.store.record(cp) else {
                continue;
            };
            if self.mode.matches(record) {
                self.seen.insert(cp);
                return Some(DisplayMatch::new(&CharacterRecord::Assigned(record), None));
            }
        }

        self.done = true;
        None
    }
}

/// Builds the exact-match queue for a substring query.
///
/// Every interpretation that resolves to a known codepoint is queued. Hex
/// references and case-sensitive entity names go to the front; the rest are
/// appended.
fn exact_matches(store: &DataStore, query: &str) -> VecDeque<DisplayMatch> {
    let mut queue = VecDeque::new();
    let target = query.trim();

    if let Some(cp) = captured_number(decimal_regex(), target, 10) {
        if let Some(record) = lookup::lookup(store, cp) {
            queue.push_back(DisplayMatch::new(&record, Some(format!("Decimal: {}", cp))));
        }
    }

    if let Some(cp) = captured_number(hex_regex(), target, 16) {
        if let Some(record) = lookup::lookup(store, cp) {
            queue.push_front(DisplayMatch::new(&record, None));
        }
    }

    if let Some(cp) = codec::utf8_hex_to_codepoint(target).filter(|&cp| cp > 127) {
        if let Some(record) = lookup::lookup(store, cp) {
            let prefix = format!("UTF8 Hex: {}", codec::to_utf8_hex(cp));
            queue.push_back(DisplayMatch::new(&record, Some(prefix)));
        }
    }

    let name = target.strip_prefix('&').unwrap_or(target);
    let name = name.strip_suffix(';').unwrap_or(name);
    if !name.is_empty() {
        if let Some(entity) = store.entity(name) {
            if let Some(record) = lookup::lookup(store, entity.codepoint) {
                queue.push_front(DisplayMatch::new(&record, Some(format!("&{};", entity.name))));
            }
        }
        for entity in store.entities_by_upper(&name.to_uppercase()) {
            if entity.name == name {
                continue;
            }
            if let Some(record) = lookup::lookup(store, entity.codepoint) {
                queue.push_back(DisplayMatch::new(&record, Some(format!("&{};", entity.name))));
            }
        }
    }

    queue
}

/// Parses whichever capture group of `regex` matched `target`.
fn captured_number(regex: &Regex, target: &str, radix: u32) -> Option<u32> {
    let caps = regex.captures(target)?;
    let digits = caps.get(1).or_else(|| caps.get(2))?;
    u32::from_str_radix(digits.as_str(), radix).ok()
}
