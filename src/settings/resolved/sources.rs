use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_threads: Option<SettingSource>,
	pub(crate) search_coincidence: Option<SettingSource>,
	pub(crate) search_time_limit: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for(
		source: &Option<SettingSource>,
		key: &'static str,
	) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
