use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(threads) = config.search.threads
		&& threads == 0
	{
		return Err(ConfigError::invalid(
			"search.threads",
			threads,
			ConfigSources::source_for(&sources.search_threads, "search.threads"),
			"must be greater than zero",
		));
	}

	if config.search.coincidence.is_nan() {
		return Err(ConfigError::invalid(
			"search.coincidence",
			config.search.coincidence,
			ConfigSources::source_for(&sources.search_coincidence, "search.coincidence"),
			"must be a number",
		));
	}

	if let Some(limit) = config.search.time_limit
		&& !(limit > 0.0 && Duration::try_from_secs_f64(limit).is_ok())
	{
		return Err(ConfigError::invalid(
			"search.time_limit",
			limit,
			ConfigSources::source_for(&sources.search_time_limit, "search.time_limit"),
			"must be a positive number of seconds",
		));
	}

	Ok(())
}
