use std::path::PathBuf;

use super::codec::{LengthWidth, read_length_prefixed, read_utf8};
use super::{BookRecord, CollectionIndex, FileRecord};
use crate::error::LoadError;

/// Decode a complete collection index.
///
/// The root path is checked for existence before any file entry is read.
/// Any malformed length anywhere aborts the whole decode.
pub fn deserialize(buf: &[u8]) -> Result<CollectionIndex, LoadError> {
	let (root_path, mut offset) = root_path_at(buf)?;
	if !root_path.exists() {
		return Err(LoadError::RootPathMissing { path: root_path });
	}

	let mut files = Vec::new();
	while offset < buf.len() {
		let (entry, next) = read_length_prefixed(buf, offset, LengthWidth::U64, false)?;
		files.push(parse_file_entry(entry, offset + 8)?);
		offset = next;
	}

	Ok(CollectionIndex { root_path, files })
}

/// Decode only the collection root stored at the head of an index.
pub fn read_root_path(buf: &[u8]) -> Result<PathBuf, LoadError> {
	root_path_at(buf).map(|(path, _)| path)
}

fn root_path_at(buf: &[u8]) -> Result<(PathBuf, usize), LoadError> {
	let (root, next) = read_utf8(buf, 0, false)?;
	Ok((PathBuf::from(root), next))
}

/// `base` is the absolute offset of `entry` inside the index, used so that
/// errors point at the right byte of the file.
fn parse_file_entry(entry: &[u8], base: usize) -> Result<FileRecord, LoadError> {
	let (relative_path, offset) = read_utf8(entry, 0, true).map_err(|err| rebase(err, base))?;
	let (content_hash, mut offset) =
		read_utf8(entry, offset, true).map_err(|err| rebase(err, base))?;

	let mut books = Vec::new();
	while offset < entry.len() {
		let (book, next) = read_length_prefixed(entry, offset, LengthWidth::U64, true)
			.map_err(|err| rebase(err, base))?;
		books.push(parse_book_entry(book, base + offset + 8)?);
		offset = next;
	}

	Ok(FileRecord {
		relative_path,
		content_hash,
		books,
	})
}

fn parse_book_entry(entry: &[u8], base: usize) -> Result<BookRecord, LoadError> {
	let mut offset = 0;
	let mut next_field = || -> Result<String, LoadError> {
		let (value, next) = read_utf8(entry, offset, true).map_err(|err| rebase(err, base))?;
		offset = next;
		Ok(value)
	};

	let book = BookRecord {
		internal_path: next_field()?,
		author: next_field()?,
		title: next_field()?,
		series: next_field()?,
		genre: next_field()?,
		date: next_field()?,
	};

	if offset != entry.len() {
		return Err(LoadError::TrailingBytes {
			offset: base + offset,
		});
	}
	Ok(book)
}

fn rebase(err: LoadError, base: usize) -> LoadError {
	match err {
		LoadError::TruncatedInput {
			offset,
			needed,
			available,
		} => LoadError::TruncatedInput {
			offset: base + offset,
			needed,
			available,
		},
		LoadError::ZeroLengthField { offset } => LoadError::ZeroLengthField {
			offset: base + offset,
		},
		LoadError::InvalidUtf8 { offset } => LoadError::InvalidUtf8 {
			offset: base + offset,
		},
		LoadError::TrailingBytes { offset } => LoadError::TrailingBytes {
			offset: base + offset,
		},
		other => other,
	}
}
