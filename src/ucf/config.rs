//! Options controlling how a [`CharFinder`](crate::CharFinder) loads and searches.

use std::path::PathBuf;

use crate::ucf::search::DEFAULT_BATCH_SIZE;

/// Characters offered as examples when nothing is selected yet.
pub const DEFAULT_SAMPLE_CHARS: [u32; 9] = [169, 233, 256, 257, 8364, 8451, 9733, 9731, 119558];

/// Default location of the character data file.
pub const DEFAULT_DATA_PATH: &str = "char-data.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOptions {
    /// Path of the character data file.
    pub data_path: PathBuf,
    /// Explicit encoding label for the data file (e.g. `"utf-8"`, `"latin1"`).
    /// When `None` the file is read as UTF-8, honouring a byte order mark.
    pub encoding: Option<String>,
    /// Matches returned per search `advance`.
    pub batch_size: usize,
    /// Example characters offered to a user.
    pub sample_chars: Vec<u32>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            encoding: None,
            batch_size: DEFAULT_BATCH_SIZE,
            sample_chars: DEFAULT_SAMPLE_CHARS.to_vec(),
        }
    }
}

impl FinderOptions {
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}
