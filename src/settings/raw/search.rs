use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::SearchSettings;

/// Coincidence used when neither the CLI nor the configuration sets one.
pub(crate) const DEFAULT_COINCIDENCE: f64 = 0.8;

/// Search tuning as read from configuration files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) coincidence: Option<f64>,
	pub(super) exact: Option<bool>,
	pub(super) threads: Option<usize>,
	pub(super) time_limit: Option<f64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.coincidence {
			self.coincidence = Some(value);
		}
		if cli.exact {
			self.exact = Some(true);
		}
		if let Some(value) = cli.threads {
			self.threads = Some(value);
		}
		if let Some(value) = cli.time_limit {
			self.time_limit = Some(value);
		}
	}

	pub(super) fn resolve(self) -> SearchSettings {
		SearchSettings {
			coincidence: self.coincidence.unwrap_or(DEFAULT_COINCIDENCE),
			exact: self.exact.unwrap_or(false),
			threads: self.threads,
			time_limit: self.time_limit,
		}
	}
}
