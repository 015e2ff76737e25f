use serde::{Deserialize, Serialize};

use super::field::BookField;
use crate::index::AUTHOR_TOKEN_SEPARATOR;

/// Criteria for a book search, shaped like a book record.
///
/// `author` carries up to three tokens separated by `\u{7}`: family name,
/// given name and patronymic. Empty fields do not constrain the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
	pub author: String,
	pub title: String,
	pub series: String,
	pub genre: String,
	pub date: String,
}

impl SearchQuery {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build the structured author field from its three tokens.
	pub fn with_author_parts(mut self, surname: &str, given_name: &str, patronymic: &str) -> Self {
		self.author = [surname, given_name, patronymic].join(&AUTHOR_TOKEN_SEPARATOR.to_string());
		self
	}

	pub fn with_author(mut self, author: impl Into<String>) -> Self {
		self.author = author.into();
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_series(mut self, series: impl Into<String>) -> Self {
		self.series = series.into();
		self
	}

	pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
		self.genre = genre.into();
		self
	}

	pub fn with_date(mut self, date: impl Into<String>) -> Self {
		self.date = date.into();
		self
	}

	/// Raw criterion for a field; the author is returned unsplit.
	pub fn field(&self, field: BookField) -> &str {
		match field {
			BookField::Author => &self.author,
			BookField::Title => &self.title,
			BookField::Series => &self.series,
			BookField::Genre => &self.genre,
			BookField::Date => &self.date,
		}
	}

	fn author_token(&self, position: usize) -> &str {
		self.author
			.split(AUTHOR_TOKEN_SEPARATOR)
			.nth(position)
			.unwrap_or_default()
	}

	pub fn surname(&self) -> &str {
		self.author_token(0)
	}

	pub fn given_name(&self) -> &str {
		self.author_token(1)
	}

	pub fn patronymic(&self) -> &str {
		self.author_token(2)
	}

	/// Non-empty author tokens joined by a space.
	pub fn author_display(&self) -> String {
		self.author
			.split(AUTHOR_TOKEN_SEPARATOR)
			.map(str::trim)
			.filter(|token| !token.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// True when no structured field constrains the search.
	pub fn is_blank(&self) -> bool {
		self.author_display().is_empty()
			&& self.title.is_empty()
			&& self.series.is_empty()
			&& self.genre.is_empty()
			&& self.date.is_empty()
	}
}
