//! Owner of the loaded collection.
//!
//! [`CollectionHandle`] keeps the decoded index behind a read/write lock:
//! loading and clearing take it exclusively, while searches, counts and the
//! author listing share it. A single [`CancellationToken`] per handle lets
//! [`CollectionHandle::stop_search`] abort whatever query is running.


use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use parking_lot::RwLock;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::{debug, error, info};

use crate::error::LoadError;
use crate::index::{self, BookBaseEntry, CollectionIndex, VALUE_SEPARATOR};
use crate::search::{
	CancellationToken, NormalizationKind, SearchOrchestrator, SearchQuery, fold, normalize,
};

/// File name of a collection index inside its collection directory.
pub const INDEX_FILE_NAME: &str = "base";

/// Location of the index file for collection `name`.
///
/// `name` must be a single directory name inside `collections_dir`.
pub fn collection_file(collections_dir: &Path, name: &str) -> Result<PathBuf, LoadError> {
	let mut components = Path::new(name).components();
	match (components.next(), components.next()) {
		(Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => {
			Ok(collections_dir.join(name).join(INDEX_FILE_NAME))
		}
		_ => Err(LoadError::InvalidName {
			name: name.to_owned(),
		}),
	}
}

fn read_index(collections_dir: &Path, name: &str) -> Result<CollectionIndex, LoadError> {
	let path = collection_file(collections_dir, name)?;
	let bytes = fs::read(&path).map_err(|err| LoadError::io(&path, err))?;
	index::deserialize(&bytes)
}

#[derive(Debug, Default)]
struct LoadedCollection {
	name: Option<String>,
	index: CollectionIndex,
}

/// Loads collections by name and answers queries against the loaded one.
pub struct CollectionHandle {
	collections_dir: PathBuf,
	state: RwLock<LoadedCollection>,
	token: CancellationToken,
	pool: Option<ThreadPool>,
}

impl CollectionHandle {
	pub fn new(collections_dir: impl Into<PathBuf>) -> Self {
		Self {
			collections_dir: collections_dir.into(),
			state: RwLock::new(LoadedCollection::default()),
			token: CancellationToken::new(),
			pool: None,
		}
	}

	/// Run searches on a dedicated pool of `threads` workers instead of the
	/// global rayon pool.
	pub fn with_threads(mut self, threads: usize) -> Result<Self, ThreadPoolBuildError> {
		let pool = ThreadPoolBuilder::new()
			.num_threads(threads)
			.thread_name(|i| format!("bookdex-search-{i}"))
			.build()?;
		self.pool = Some(pool);
		Ok(self)
	}

	pub fn collections_dir(&self) -> &Path {
		&self.collections_dir
	}

	/// Replace the loaded collection with collection `name`.
	///
	/// On any failure the handle is left with nothing loaded.
	pub fn load(&self, name: &str) -> Result<(), LoadError> {
		let mut state = self.state.write();
		*state = LoadedCollection::default();

		match read_index(&self.collections_dir, name) {
			Ok(index) => {
				info!(
					collection = name,
					root = %index.root_path.display(),
					files = index.files.len(),
					books = index.book_count(),
					"collection loaded"
				);
				state.name = Some(name.to_owned());
				state.index = index;
				Ok(())
			}
			Err(err) => {
				error!(collection = name, error = %err, "failed to load collection");
				Err(err)
			}
		}
	}

	/// Drop the loaded collection.
	pub fn clear(&self) {
		*self.state.write() = LoadedCollection::default();
		debug!("collection cleared");
	}

	/// Root directory of collection `name`, read from the index header only.
	pub fn books_path(&self, name: &str) -> Result<PathBuf, LoadError> {
		let path = collection_file(&self.collections_dir, name)?;
		let file = File::open(&path).map_err(|err| LoadError::io(&path, err))?;

		let mut header = Vec::with_capacity(2);
		(&file)
			.take(2)
			.read_to_end(&mut header)
			.map_err(|err| LoadError::io(&path, err))?;
		if let [low, high] = header[..] {
			let len = u16::from_le_bytes([low, high]);
			(&file)
				.take(u64::from(len))
				.read_to_end(&mut header)
				.map_err(|err| LoadError::io(&path, err))?;
		}

		index::read_root_path(&header)
	}

	pub fn is_loaded(&self) -> bool {
		self.state.read().name.is_some()
	}

	/// Name of the loaded collection.
	pub fn loaded_name(&self) -> Option<String> {
		self.state.read().name.clone()
	}

	/// Root directory of the loaded collection.
	pub fn root_path(&self) -> Result<PathBuf, LoadError> {
		let state = self.state.read();
		match state.name {
			Some(_) => Ok(state.index.root_path.clone()),
			None => Err(LoadError::NotLoaded),
		}
	}

	/// Total number of books in the loaded collection.
	pub fn quantity(&self) -> usize {
		self.state.read().index.book_count()
	}

	/// Distinct author names in first-seen order.
	///
	/// Multi-author fields are split on `", "`; names are compared
	/// case-insensitively after normalization and reported as first seen.
	/// Returns nothing if [`stop_search`](Self::stop_search) interrupts it.
	pub fn authors(&self) -> Vec<String> {
		let state = self.state.read();
		let index = &state.index;
		let token = &self.token;
		token.reset();

		let names: Vec<String> = self.install(|| {
			index
				.files
				.par_iter()
				.flat_map_iter(|file| file.books.iter())
				.filter(|_| !token.is_cancelled())
				.flat_map_iter(|book| {
					book.author
						.split(VALUE_SEPARATOR)
						.map(|name| normalize(name, NormalizationKind::Author))
						.filter(|name| !name.is_empty())
						.collect::<Vec<_>>()
				})
				.collect()
		});

		let mut seen = HashSet::new();
		let mut authors = Vec::new();
		for name in names {
			if token.is_cancelled() {
				return Vec::new();
			}
			if seen.insert(fold(&name, NormalizationKind::Author)) {
				authors.push(name);
			}
		}

		if token.is_cancelled() {
			return Vec::new();
		}
		authors
	}

	/// Search the loaded collection. See [`SearchOrchestrator::search`].
	pub fn search(&self, query: &SearchQuery, coincidence: f64) -> Vec<BookBaseEntry> {
		let state = self.state.read();
		let index = &state.index;
		let token = &self.token;
		let results =
			self.install(|| SearchOrchestrator::new(index, token).search(query, coincidence));
		debug!(matches = results.len(), "search finished");
		results
	}

	/// Abort the running search or author listing; it will return nothing.
	pub fn stop_search(&self) {
		self.token.cancel();
	}

	/// Token shared by every search on this handle.
	pub fn cancellation_token(&self) -> CancellationToken {
		self.token.clone()
	}

	fn install<R, F>(&self, op: F) -> R
	where
		R: Send,
		F: FnOnce() -> R + Send,
	{
		match &self.pool {
			Some(pool) => pool.install(op),
			None => op(),
		}
	}
}
