//! Errors raised while loading, parsing and querying character data.

use thiserror::Error;

/// Every fallible operation in this crate returns this error.
#[derive(Debug, Error)]
pub enum UcfError {
    /// Reading the data file failed.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A data line starts with a sigil the parser does not know.
    #[error("Unsupported line kind {sigil:?} on line {line}")]
    UnsupportedLineKind { line: usize, sigil: char },

    /// A data line is structurally invalid (missing or unparsable fields).
    #[error("Malformed data on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// A string that was expected to be hexadecimal is not.
    #[error("Invalid hex number: {0:?}")]
    InvalidHex(String),

    /// A `/regex/` search query failed to compile.
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The requested text encoding label is not known.
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// Character data has been requested but not loaded yet.
    #[error("Character data is still loading")]
    NotLoaded,

    /// The last attempt to load character data failed.
    #[error("Character data failed to load: {0}")]
    LoadFailed(String),
}

impl UcfError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        UcfError::MalformedLine { line, reason: reason.into() }
    }

    /// Returns `true` for errors raised while parsing the data format.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            UcfError::UnsupportedLineKind { .. } | UcfError::MalformedLine { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `UcfError` type.
pub type Result<T> = std::result::Result<T, UcfError>;
