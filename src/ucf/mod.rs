//! Core character finder module

pub mod codec;
pub mod config;
pub mod finder;
pub mod format;
pub mod iter;
pub mod lookup;
pub mod navigate;
pub mod search;
pub mod types;
pub mod utils;

pub use config::FinderOptions;
pub use finder::{CharFinder, LoadState};
pub use format::DataStore;
pub use search::{SearchMode, SearchSession};
pub use types::error::{Result, UcfError};
