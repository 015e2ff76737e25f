use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bookdex::{BookBaseEntry, CancellationToken, CollectionHandle, SearchQuery};
use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::settings::ResolvedConfig;

/// What the user asked the binary to do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
	BooksPath,
	Count,
	Authors,
	Search(SearchQuery),
}

impl Action {
	pub(crate) fn from_cli(cli: &CliArgs) -> Self {
		if cli.books_path {
			return Self::BooksPath;
		}
		if cli.count {
			return Self::Count;
		}
		if cli.authors {
			return Self::Authors;
		}
		Self::Search(query_from_cli(cli))
	}
}

/// Build the search query from the field flags.
///
/// `--author` is split on whitespace into family name, given name and
/// patronymic; anything past the third word stays with the patronymic. The
/// dedicated flags replace the matching part.
fn query_from_cli(cli: &CliArgs) -> SearchQuery {
	let mut words = cli.author.as_deref().unwrap_or_default().split_whitespace();
	let surname = words.next().unwrap_or_default();
	let given_name = words.next().unwrap_or_default();
	let patronymic = words.collect::<Vec<_>>().join(" ");

	let surname = cli.surname.as_deref().unwrap_or(surname);
	let given_name = cli.given_name.as_deref().unwrap_or(given_name);
	let patronymic = cli.patronymic.as_deref().unwrap_or(&patronymic);

	let mut query = SearchQuery::new().with_author_parts(surname, given_name, patronymic);
	if let Some(title) = &cli.title {
		query = query.with_title(title.as_str());
	}
	if let Some(series) = &cli.series {
		query = query.with_series(series.as_str());
	}
	if let Some(genre) = &cli.genre {
		query = query.with_genre(genre.as_str());
	}
	if let Some(date) = &cli.date {
		query = query.with_date(date.as_str());
	}
	query
}

/// Result of running an [`Action`].
#[derive(Debug)]
pub(crate) enum Outcome {
	BooksPath(PathBuf),
	Count(usize),
	Authors { names: Vec<String>, cancelled: bool },
	Books { entries: Vec<BookBaseEntry>, cancelled: bool },
}

/// Coordinates opening the configured collection and running one action
/// against it.
pub(crate) struct SearchWorkflow {
	handle: CollectionHandle,
	collection: String,
	coincidence: f64,
	time_limit: Option<Duration>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let mut handle = CollectionHandle::new(config.collections_dir);
		if let Some(threads) = config.search.threads {
			handle = handle
				.with_threads(threads)
				.context("failed to build the search thread pool")?;
		}

		Ok(Self {
			handle,
			collection: config.collection,
			coincidence: config.search.effective_coincidence(),
			time_limit: config.search.time_limit(),
		})
	}

	pub(crate) fn run(self, action: Action) -> Result<Outcome> {
		match action {
			Action::BooksPath => self.books_path(),
			Action::Count => {
				self.load()?;
				Ok(Outcome::Count(self.handle.quantity()))
			}
			Action::Authors => {
				self.load()?;
				Ok(self.authors())
			}
			Action::Search(query) => {
				self.load()?;
				Ok(self.search(&query))
			}
		}
	}

	fn books_path(&self) -> Result<Outcome> {
		let root = self
			.handle
			.books_path(&self.collection)
			.with_context(|| format!("failed to read collection '{}'", self.collection))?;
		Ok(Outcome::BooksPath(root))
	}

	fn load(&self) -> Result<()> {
		self.handle
			.load(&self.collection)
			.with_context(|| format!("failed to load collection '{}'", self.collection))
	}

	fn authors(&self) -> Outcome {
		let token = self.handle.cancellation_token();
		let started = Instant::now();
		let watchdog = self.arm_time_limit(&token);
		let mut names = self.handle.authors();
		drop(watchdog);

		let cancelled = self.stopped(started, &token, names.is_empty());
		if cancelled {
			names.clear();
		}
		Outcome::Authors { names, cancelled }
	}

	fn search(&self, query: &SearchQuery) -> Outcome {
		debug!(?query, coincidence = self.coincidence, "running search");
		let token = self.handle.cancellation_token();
		let started = Instant::now();
		let watchdog = self.arm_time_limit(&token);
		let mut entries = self.handle.search(query, self.coincidence);
		drop(watchdog);

		let cancelled = self.stopped(started, &token, entries.is_empty());
		if cancelled {
			entries.clear();
		}
		Outcome::Books { entries, cancelled }
	}

	/// Whether the run must be reported as stopped by the time limit.
	///
	/// The search resets the token on entry, so a limit that fired before
	/// that point is caught by the elapsed time instead.
	fn stopped(&self, started: Instant, token: &CancellationToken, empty: bool) -> bool {
		let expired = self
			.time_limit
			.is_some_and(|limit| started.elapsed() >= limit);
		let cancelled = expired || (empty && token.is_cancelled());
		if cancelled {
			warn!(limit = ?self.time_limit, "time limit reached; search stopped");
		}
		cancelled
	}

	fn arm_time_limit(&self, token: &CancellationToken) -> Option<Sender<()>> {
		self.time_limit
			.map(|limit| spawn_watchdog(limit, token.clone()))
	}
}

/// Cancel `token` once `limit` elapses unless the returned sender is dropped
/// first.
fn spawn_watchdog(limit: Duration, token: CancellationToken) -> Sender<()> {
	let (done, finished) = mpsc::channel::<()>();
	thread::spawn(move || {
		if let Err(RecvTimeoutError::Timeout) = finished.recv_timeout(limit) {
			token.cancel();
		}
	});
	done
}
