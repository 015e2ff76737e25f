use std::path::PathBuf;
use std::time::Duration;

use bookdex::EXACT_COINCIDENCE;

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) collections_dir: PathBuf,
	pub(crate) collection: String,
	pub(crate) search: SearchSettings,
	pub(crate) output: OutputFormat,
}

/// How searches run against the loaded collection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchSettings {
	pub(crate) coincidence: f64,
	pub(crate) exact: bool,
	pub(crate) threads: Option<usize>,
	pub(crate) time_limit: Option<f64>,
}

impl SearchSettings {
	/// Coincidence passed to the search, with exact mode folded in.
	pub(crate) fn effective_coincidence(&self) -> f64 {
		if self.exact {
			EXACT_COINCIDENCE
		} else {
			self.coincidence
		}
	}

	/// Time budget for a search, if one was configured.
	pub(crate) fn time_limit(&self) -> Option<Duration> {
		self.time_limit
			.filter(|secs| *secs > 0.0)
			.and_then(|secs| Duration::try_from_secs_f64(secs).ok())
	}
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
