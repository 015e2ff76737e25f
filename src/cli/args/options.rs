use clap::ValueEnum;
use serde::Deserialize;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

impl OutputFormat {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}
}
