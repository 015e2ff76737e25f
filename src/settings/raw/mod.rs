use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod collection;
mod search;

use collection::CollectionSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	collection: CollectionSection,
	search: SearchSection,
	output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
	format: Option<OutputFormat>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.collection.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		if let Some(format) = cli.output {
			self.output.format = Some(format);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_threads: detect_source(
				cli.threads.is_some(),
				self.search.threads.is_some(),
				"BOOKDEX__SEARCH__THREADS",
				"--threads",
				"search.threads",
			),
			search_coincidence: detect_source(
				cli.coincidence.is_some(),
				self.search.coincidence.is_some(),
				"BOOKDEX__SEARCH__COINCIDENCE",
				"--coincidence",
				"search.coincidence",
			),
			search_time_limit: detect_source(
				cli.time_limit.is_some(),
				self.search.time_limit.is_some(),
				"BOOKDEX__SEARCH__TIME_LIMIT",
				"--time-limit",
				"search.time_limit",
			),
		};

		let (collections_dir, collection) = self.collection.resolve()?;

		let config = ResolvedConfig {
			collections_dir,
			collection,
			search: self.search.resolve(),
			output: self.output.format.unwrap_or(OutputFormat::Plain),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
