use rayon::prelude::*;

use super::cancel::CancellationToken;
use super::field::BookField;
use super::normalize::fold;
use super::query::SearchQuery;
use crate::index::{BookBaseEntry, BookRecord, VALUE_SEPARATOR};

/// Folded query values that must each appear verbatim in a result.
#[derive(Debug, Default)]
pub(crate) struct ExactCriteria {
	fields: Vec<(BookField, String)>,
}

impl ExactCriteria {
	pub(crate) fn from_query(query: &SearchQuery) -> Self {
		let fields = BookField::ALL
			.into_iter()
			.filter_map(|field| {
				let raw = match field {
					BookField::Author => query.author_display(),
					other => query.field(other).to_owned(),
				};
				let folded = fold(&raw, field.kind());
				(!folded.is_empty()).then_some((field, folded))
			})
			.collect();
		Self { fields }
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Every criterion must equal one of the `", "`-separated values of the
	/// corresponding book field.
	pub(crate) fn accepts(&self, book: &BookRecord) -> bool {
		self.fields.iter().all(|(field, needle)| {
			field
				.of(book)
				.split(VALUE_SEPARATOR)
				.any(|value| fold(value, field.kind()) == *needle)
		})
	}
}

pub(crate) fn retain_exact(
	results: Vec<BookBaseEntry>,
	query: &SearchQuery,
	token: &CancellationToken,
) -> Vec<BookBaseEntry> {
	let criteria = ExactCriteria::from_query(query);
	if criteria.is_empty() {
		return results;
	}

	results
		.into_par_iter()
		.filter(|entry| !token.is_cancelled() && criteria.accepts(&entry.book))
		.collect()
}
