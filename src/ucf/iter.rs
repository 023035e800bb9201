//! Iterators over search results.
//!
//! A [`SearchSession`] is itself an iterator of [`DisplayMatch`] values, one
//! at a time. [`Batches`] layers pagination on top and yields whole pages,
//! which is what a "load more" control consumes.
//!
//! # Example
//! ```no_run
//! # use unicode_char_finder::{CharFinder, FinderOptions};
//! # let finder = CharFinder::open(FinderOptions::default()).unwrap();
//! if let Some(session) = finder.start_search("arrow") {
//!     for page in session.batches().take(3) {
//!         for found in page {
//!             println!("U+{} {}", found.hex, found.description);
//!         }
//!     }
//! }
//! ```

use super::search::SearchSession;
use super::types::models::DisplayMatch;

impl<'a> Iterator for SearchSession<'a> {
    type Item = DisplayMatch;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_match()
    }
}

impl<'a> SearchSession<'a> {
    /// Transforms this session into an iterator over result pages.
    pub fn batches(self) -> Batches<'a> {
        Batches { session: self }
    }
}

/// Iterator over non-empty pages of search results.
///
/// Created by [`SearchSession::batches()`].
pub struct Batches<'a> {
    session: SearchSession<'a>,
}

impl<'a> Batches<'a> {
    /// The underlying session, e.g. to inspect its cursor.
    pub fn session(&self) -> &SearchSession<'a> {
        &self.session
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<DisplayMatch>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = self.session.advance();
        if batch.matches.is_empty() {
            None
        } else {
            Some(batch.matches)
        }
    }
}
