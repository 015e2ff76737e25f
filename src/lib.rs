//! Binary book-collection index and multi-field fuzzy search.
//!
//! A collection builder writes one index file per collection; this crate reads
//! it into memory through [`CollectionHandle`] and answers author, title,
//! series and genre queries with a cancellable, parallel search.

pub mod app_dirs;
pub mod collection;
pub mod error;
pub mod index;
pub mod logging;
pub mod search;

pub use collection::CollectionHandle;
pub use error::LoadError;
pub use index::{BookBaseEntry, BookRecord, CollectionIndex, FileRecord};
pub use search::{CancellationToken, EXACT_COINCIDENCE, SearchQuery};
