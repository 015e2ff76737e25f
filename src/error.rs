use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading a collection index from disk.
///
/// Any of these aborts the whole load: the handle is left without an index
/// rather than holding a partially decoded one.
#[derive(Debug, Error)]
pub enum LoadError {
	/// Fewer bytes remain than a width or a declared length requires.
	#[error("index truncated at byte {offset}: needed {needed} bytes, {available} available")]
	TruncatedInput {
		offset: usize,
		needed: usize,
		available: usize,
	},

	/// A length prefix was zero where the format requires a non-empty field.
	#[error("zero-length field at byte {offset}")]
	ZeroLengthField { offset: usize },

	/// A string field did not hold valid UTF-8.
	#[error("field at byte {offset} is not valid UTF-8")]
	InvalidUtf8 { offset: usize },

	/// A book entry declared more bytes than its six fields consumed.
	#[error("unexpected trailing bytes in book entry at byte {offset}")]
	TrailingBytes { offset: usize },

	/// The collection root stored in the index does not exist.
	#[error("collection root {} does not exist", path.display())]
	RootPathMissing { path: PathBuf },

	/// A collection name that is not a single directory name.
	#[error("invalid collection name '{name}'")]
	InvalidName { name: String },

	/// An operation needed a loaded collection but none is loaded.
	#[error("no collection is loaded")]
	NotLoaded,

	/// The index file itself could not be read.
	#[error("failed to read collection index {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl LoadError {
	pub(crate) fn truncated(offset: usize, needed: usize, buf_len: usize) -> Self {
		Self::TruncatedInput {
			offset,
			needed,
			available: buf_len.saturating_sub(offset),
		}
	}

	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
