use super::normalize::NormalizationKind;
use crate::index::BookRecord;

/// Searchable fields of a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
	Author,
	Title,
	Series,
	Genre,
	Date,
}

impl BookField {
	pub fn of(self, book: &BookRecord) -> &str {
		match self {
			Self::Author => &book.author,
			Self::Title => &book.title,
			Self::Series => &book.series,
			Self::Genre => &book.genre,
			Self::Date => &book.date,
		}
	}

	pub fn of_mut(self, book: &mut BookRecord) -> &mut String {
		match self {
			Self::Author => &mut book.author,
			Self::Title => &mut book.title,
			Self::Series => &mut book.series,
			Self::Genre => &mut book.genre,
			Self::Date => &mut book.date,
		}
	}

	pub fn kind(self) -> NormalizationKind {
		match self {
			Self::Author => NormalizationKind::Author,
			_ => NormalizationKind::Other,
		}
	}

	pub const ALL: [BookField; 5] = [
		Self::Author,
		Self::Title,
		Self::Series,
		Self::Genre,
		Self::Date,
	];
}
