use std::fs;

use log::{debug, info};

use super::codec;
use super::config::FinderOptions;
use super::format::DataStore;
use super::lookup;
use super::navigate;
use super::search::SearchSession;
use super::types::error::{Result, UcfError};
use super::types::models::*;
use super::utils;

/// The character finder engine.
///
/// Owns one parsed [`DataStore`] and answers lookups, searches and navigation
/// requests against it. The store is read-only after construction, so any
/// number of lookups and search sessions may borrow it at once.
#[derive(Debug)]
pub struct CharFinder {
    store: DataStore,
    options: FinderOptions,
}

impl CharFinder {
    /// Loads the data file named in `options`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The configured encoding label is unknown
    /// - The data contains an unsupported or malformed line
    pub fn open(options: FinderOptions) -> Result<Self> {
        info!("Opening character data: {}", options.data_path.display());
        let bytes = fs::read(&options.data_path)?;
        Self::from_bytes(&bytes, options)
    }

    /// Decodes and parses raw data file bytes.
    pub fn from_bytes(bytes: &[u8], options: FinderOptions) -> Result<Self> {
        let text = utils::decode_text(bytes, options.encoding.as_deref())?;
        Self::from_text(&text, options)
    }

    /// Parses already decoded character data.
    pub fn from_text(text: &str, options: FinderOptions) -> Result<Self> {
        let store = DataStore::parse(text)?;
        Ok(Self { store, options })
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Looks up a single codepoint. See [`lookup::lookup`].
    pub fn lookup(&self, cp: u32) -> Option<CharacterRecord<'_>> {
        lookup::lookup(&self.store, cp)
    }

    pub fn block_from_codepoint(&self, cp: u32) -> Option<&Block> {
        lookup::block_from_codepoint(&self.store, cp)
    }

    /// Starts a search, treating an invalid `/regex/` as "no results".
    ///
    /// Returns `None` for an empty query or a pattern that does not compile.
    pub fn start_search(&self, query: &str) -> Option<SearchSession<'_>> {
        match self.try_start_search(query) {
            Ok(session) => session,
            Err(e) => {
                debug!("Search for {:?} abandoned: {}", query, e);
                None
            }
        }
    }

    /// Starts a search, reporting invalid patterns to the caller.
    pub fn try_start_search(&self, query: &str) -> Result<Option<SearchSession<'_>>> {
        SearchSession::start(&self.store, query, self.options.batch_size)
    }

    /// Steps to the adjacent displayable codepoint. See [`navigate::step`].
    pub fn step(&self, cp: u32, direction: Direction) -> Option<u32> {
        navigate::step(&self.store, cp, direction)
    }

    pub fn block_step(&self, cp: u32, direction: Direction) -> u32 {
        navigate::block_step(&self.store, cp, direction)
    }

    pub fn page_window(&self, base: u32) -> ChartPage {
        navigate::page_window(&self.store, base)
    }

    pub fn chart_for(&self, cp: u32) -> ChartPage {
        navigate::chart_for(&self.store, cp)
    }

    /// Chart page `incr` pages away from `page`.
    pub fn page_step(&self, page: &ChartPage, incr: i32) -> ChartPage {
        self.page_window(navigate::page_step(page.base, incr))
    }

    /// Collects everything known about `cp` for display.
    pub fn char_info(&self, cp: u32) -> CharInfo<'_> {
        let record = self.lookup(cp);
        CharInfo {
            codepoint: cp,
            code: format!("U+{}", codec::dec_to_hex(cp, 4)),
            character: codec::display_string(cp),
            description: record
                .as_ref()
                .map(|rec| rec.description().to_string())
                .filter(|desc| !desc.is_empty()),
            alias: record.as_ref().and_then(|rec| rec.alias()).map(str::to_string),
            reserved_kind: record.as_ref().and_then(|rec| rec.reserved_kind()),
            html_entity: format!("&#{};", cp),
            named_entity: record
                .as_ref()
                .and_then(|rec| rec.entity_name())
                .map(|name| format!("&{};", name)),
            utf8_hex: codec::to_utf8_hex(cp),
            utf16_hex: codec::to_utf16_hex(cp),
            block: self.block_from_codepoint(cp),
        }
    }

    /// Describes the last character of typed or pasted text.
    ///
    /// Returns `None` for empty text.
    pub fn examine(&self, text: &str) -> Option<CharInfo<'_>> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let cp = codec::utf16_to_codepoint(codec::last_character(&units))?;
        Some(self.char_info(cp))
    }

    /// Information on each configured sample character.
    pub fn samples(&self) -> Vec<CharInfo<'_>> {
        self.options
            .sample_chars
            .iter()
            .map(|&cp| self.char_info(cp))
            .collect()
    }
}

/// Loading lifecycle of a finder whose data arrives asynchronously.
///
/// Lets a caller tell "still loading" apart from "failed to load".
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(CharFinder),
    Failed(UcfError),
}

impl LoadState {
    /// Completes a load with the fetched bytes (or the fetch error).
    pub fn complete(&mut self, fetched: Result<Vec<u8>>, options: FinderOptions) {
        *self = match fetched.and_then(|bytes| CharFinder::from_bytes(&bytes, options)) {
            Ok(finder) => LoadState::Ready(finder),
            Err(e) => {
                info!("Character data failed to load: {}", e);
                LoadState::Failed(e)
            }
        };
    }

    /// The ready finder.
    ///
    /// # Errors
    /// `NotLoaded` while loading, `LoadFailed` after a failed load.
    pub fn finder(&self) -> Result<&CharFinder> {
        match self {
            LoadState::Loading => Err(UcfError::NotLoaded),
            LoadState::Ready(finder) => Ok(finder),
            LoadState::Failed(e) => Err(UcfError::LoadFailed(e.to_string())),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}
