//! Data format parsing layer.
//!
//! # Module Organization
//!
//! - [`line`]: Classifies a single tab-separated line by its sigil
//! - [`store`]: Builds the [`DataStore`] from all lines in one pass
//!
//! # Data Flow
//!
//! ```text
//! raw text ──split('\n')──▶ line::parse_compact / parse_tabular ──▶ Line
//!                                                                   │
//!                              StoreBuilder (running codepoint) ◀───┘
//!                                       │
//!                                       ▼
//!                                   DataStore
//! ```

pub mod line;
pub mod store;

pub use line::FormatVariant;
pub use store::DataStore;
