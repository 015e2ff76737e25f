//! Multi-field fuzzy search over a loaded collection.

mod cancel;
mod exact;
mod field;
pub mod matcher;
pub mod normalize;
mod orchestrator;
mod query;

#[cfg(test)]
mod tests;

pub use cancel::CancellationToken;
pub use field::BookField;
pub use matcher::matches;
pub use normalize::{NormalizationKind, fold, normalize};
pub use orchestrator::{CLAMPED_COINCIDENCE, SearchOrchestrator, resolve_coincidence};
pub use query::SearchQuery;

/// Coincidence above `1.0` that requests exact matching.
pub const EXACT_COINCIDENCE: f64 = 2.0;
