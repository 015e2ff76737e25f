use rayon::prelude::*;
use tracing::debug;

use super::cancel::CancellationToken;
use super::exact::retain_exact;
use super::field::BookField;
use super::matcher::matches;
use super::normalize::{fold, normalize};
use super::query::SearchQuery;
use crate::index::{BookBaseEntry, CollectionIndex};

/// Coincidence used when the caller supplies a value outside `[0, 1]`.
pub const CLAMPED_COINCIDENCE: f64 = 0.99;

/// The six search steps, run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Surname,
	GivenName,
	Patronymic,
	Title,
	Series,
	Genre,
}

impl Phase {
	const ORDER: [Phase; 6] = [
		Self::Surname,
		Self::GivenName,
		Self::Patronymic,
		Self::Title,
		Self::Series,
		Self::Genre,
	];

	fn needle(self, query: &SearchQuery) -> &str {
		match self {
			Self::Surname => query.surname(),
			Self::GivenName => query.given_name(),
			Self::Patronymic => query.patronymic(),
			Self::Title => &query.title,
			Self::Series => &query.series,
			Self::Genre => &query.genre,
		}
	}

	fn field(self) -> BookField {
		match self {
			Self::Surname | Self::GivenName | Self::Patronymic => BookField::Author,
			Self::Title => BookField::Title,
			Self::Series => BookField::Series,
			Self::Genre => BookField::Genre,
		}
	}
}

/// Split the caller's coincidence into the value used for fuzzy matching and
/// whether the exact-match filter runs afterwards.
///
/// Anything outside `[0, 1]` (including NaN) is clamped; values above `1.0`
/// additionally request exact matching.
pub fn resolve_coincidence(coincidence: f64) -> (f64, bool) {
	if (0.0..=1.0).contains(&coincidence) {
		(coincidence, false)
	} else {
		(CLAMPED_COINCIDENCE, coincidence > 1.0)
	}
}

/// Runs multi-phase book queries over a borrowed index.
pub struct SearchOrchestrator<'a> {
	index: &'a CollectionIndex,
	token: &'a CancellationToken,
}

impl<'a> SearchOrchestrator<'a> {
	pub fn new(index: &'a CollectionIndex, token: &'a CancellationToken) -> Self {
		Self { index, token }
	}

	/// Search the index for books matching `query`.
	///
	/// The first phase with a non-empty criterion scans the whole index, later
	/// phases narrow its results, and a phase that leaves nothing ends the
	/// search. When no phase runs the whole index is returned in source order.
	/// A cancelled search always returns an empty vector.
	pub fn search(&self, query: &SearchQuery, coincidence: f64) -> Vec<BookBaseEntry> {
		self.token.reset();
		self.run(query, coincidence)
	}

	/// Body of [`search`](Self::search) without resetting the token.
	pub(super) fn run(&self, query: &SearchQuery, coincidence: f64) -> Vec<BookBaseEntry> {
		let (coincidence, exact) = resolve_coincidence(coincidence);
		let results = self
			.run_phases(query, coincidence)
			.unwrap_or_else(|| self.index.entries());
		self.finish(results, query, exact)
	}

	/// Run every phase with a non-empty criterion. `None` means no phase ran.
	pub(super) fn run_phases(
		&self,
		query: &SearchQuery,
		coincidence: f64,
	) -> Option<Vec<BookBaseEntry>> {
		if query.is_blank() {
			return None;
		}

		let mut results = None;
		for phase in Phase::ORDER {
			if self.token.is_cancelled() {
				return Some(Vec::new());
			}

			let needle = phase.needle(query);
			if fold(needle, phase.field().kind()).is_empty() {
				continue;
			}

			let matched = match results {
				Some(previous) => self.narrow(previous, phase, needle, coincidence),
				None => self.scan(phase, needle, coincidence),
			};
			debug!(?phase, needle, matches = matched.len(), "search phase finished");

			let exhausted = matched.is_empty();
			results = Some(matched);
			if exhausted {
				break;
			}
		}
		results
	}

	/// Apply the exact filter and display cleanup to accumulated results.
	/// Anything gathered before a cancellation is dropped.
	pub(super) fn finish(
		&self,
		mut results: Vec<BookBaseEntry>,
		query: &SearchQuery,
		exact: bool,
	) -> Vec<BookBaseEntry> {
		if self.token.is_cancelled() {
			return Vec::new();
		}

		if exact {
			results = retain_exact(results, query, self.token);
			debug!(matches = results.len(), "exact filter applied");
		}

		if self.token.is_cancelled() {
			return Vec::new();
		}

		results.into_iter().map(tidy_entry).collect()
	}

	fn scan(&self, phase: Phase, needle: &str, coincidence: f64) -> Vec<BookBaseEntry> {
		let field = phase.field();
		let token = self.token;
		let index = self.index;

		index
			.files
			.par_iter()
			.filter(|_| !token.is_cancelled())
			.flat_map(|file| {
				let file_path = index.resolve(file);
				file.books
					.par_iter()
					.filter(move |book| {
						!token.is_cancelled()
							&& matches(needle, field.of(book), coincidence, field.kind())
					})
					.map(move |book| BookBaseEntry::new(book.clone(), file_path.clone()))
			})
			.collect()
	}

	fn narrow(
		&self,
		results: Vec<BookBaseEntry>,
		phase: Phase,
		needle: &str,
		coincidence: f64,
	) -> Vec<BookBaseEntry> {
		let field = phase.field();
		let token = self.token;

		results
			.into_par_iter()
			.filter(|entry| {
				!token.is_cancelled()
					&& matches(needle, field.of(&entry.book), coincidence, field.kind())
			})
			.collect()
	}
}

/// Display cleanup applied to every returned entry.
fn tidy_entry(mut entry: BookBaseEntry) -> BookBaseEntry {
	for field in BookField::ALL {
		let value = field.of_mut(&mut entry.book);
		*value = normalize(value, field.kind());
	}
	entry
}
