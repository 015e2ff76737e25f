//! In-memory representation of a book collection and the decoder that builds
//! it from the binary index file written by the collection builder.

pub mod codec;
mod deserialize;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use deserialize::{deserialize, read_root_path};

/// Separator between the family name, given name and patronymic of an author.
pub const AUTHOR_TOKEN_SEPARATOR: char = '\u{7}';

/// Separator between the values of a multi-valued field.
pub const VALUE_SEPARATOR: &str = ", ";

/// Bibliographic record for one book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
	/// Location of the book inside an archive; empty for standalone files.
	pub internal_path: String,
	pub author: String,
	pub title: String,
	pub series: String,
	pub genre: String,
	pub date: String,
}

/// One physical file of the collection: a book file or an archive of books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
	/// Path relative to the collection root.
	pub relative_path: String,
	pub content_hash: String,
	pub books: Vec<BookRecord>,
}

/// Complete decoded collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionIndex {
	pub root_path: PathBuf,
	pub files: Vec<FileRecord>,
}

impl CollectionIndex {
	pub fn new(root_path: impl Into<PathBuf>, files: Vec<FileRecord>) -> Self {
		Self {
			root_path: root_path.into(),
			files,
		}
	}

	/// Total number of books across all files.
	pub fn book_count(&self) -> usize {
		self.files.iter().map(|file| file.books.len()).sum()
	}

	/// Whether the index holds no root and no files, i.e. nothing is loaded.
	pub fn is_empty(&self) -> bool {
		self.root_path.as_os_str().is_empty() && self.files.is_empty()
	}

	/// Absolute location of a file record.
	pub fn resolve(&self, file: &FileRecord) -> PathBuf {
		self.root_path.join(&file.relative_path)
	}

	/// Every book of the index paired with its file location, in source order.
	pub fn entries(&self) -> Vec<BookBaseEntry> {
		self.files
			.iter()
			.flat_map(|file| {
				let file_path = self.resolve(file);
				file.books
					.iter()
					.map(move |book| BookBaseEntry::new(book.clone(), file_path.clone()))
			})
			.collect()
	}
}

/// A search hit: a copy of a book record and the file that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBaseEntry {
	pub book: BookRecord,
	pub file_path: PathBuf,
}

impl BookBaseEntry {
	pub fn new(book: BookRecord, file_path: impl Into<PathBuf>) -> Self {
		Self {
			book,
			file_path: file_path.into(),
		}
	}

	pub fn file_path(&self) -> &Path {
		&self.file_path
	}
}
