//! Fixture helpers that write the collection builder's binary format.

use std::fs;
use std::path::{Path, PathBuf};

use super::{BookRecord, CollectionIndex, FileRecord};

fn put_str(out: &mut Vec<u8>, value: &str) {
	let len = u16::try_from(value.len()).expect("field fits in u16");
	out.extend_from_slice(&len.to_le_bytes());
	out.extend_from_slice(value.as_bytes());
}

fn put_blob(out: &mut Vec<u8>, blob: &[u8]) {
	out.extend_from_slice(&(blob.len() as u64).to_le_bytes());
	out.extend_from_slice(blob);
}

pub(crate) fn encode_book(book: &BookRecord) -> Vec<u8> {
	let mut out = Vec::new();
	for field in [
		&book.internal_path,
		&book.author,
		&book.title,
		&book.series,
		&book.genre,
		&book.date,
	] {
		put_str(&mut out, field);
	}
	out
}

pub(crate) fn encode_file(file: &FileRecord) -> Vec<u8> {
	let mut out = Vec::new();
	put_str(&mut out, &file.relative_path);
	put_str(&mut out, &file.content_hash);
	for book in &file.books {
		put_blob(&mut out, &encode_book(book));
	}
	out
}

/// Encode an index, returning the bytes and the offsets at which each file
/// entry ends (the first offset is the end of the root path header).
pub(crate) fn encode_with_boundaries(index: &CollectionIndex) -> (Vec<u8>, Vec<usize>) {
	let mut out = Vec::new();
	put_str(&mut out, &index.root_path.to_string_lossy());
	let mut boundaries = vec![out.len()];
	for file in &index.files {
		put_blob(&mut out, &encode_file(file));
		boundaries.push(out.len());
	}
	(out, boundaries)
}

pub(crate) fn encode(index: &CollectionIndex) -> Vec<u8> {
	encode_with_boundaries(index).0
}

pub(crate) fn book(author: &str, title: &str) -> BookRecord {
	BookRecord {
		author: author.into(),
		title: title.into(),
		..BookRecord::default()
	}
}

pub(crate) fn file(relative_path: &str, books: Vec<BookRecord>) -> FileRecord {
	FileRecord {
		relative_path: relative_path.into(),
		content_hash: "00ff".into(),
		books,
	}
}

/// Write `index` as collection `name` under `collections_dir`.
pub(crate) fn write_collection(collections_dir: &Path, name: &str, index: &CollectionIndex) -> PathBuf {
	let path = crate::collection::collection_file(collections_dir, name).expect("valid collection name");
	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir).expect("create collection dir");
	}
	fs::write(&path, encode(index)).expect("write collection");
	path
}
