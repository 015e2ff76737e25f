use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use bookdex::app_dirs;

use crate::cli::CliArgs;

use super::super::util::{non_blank, sanitize_collection_name};

/// Which collection to open and where collections live.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CollectionSection {
	pub(super) dir: Option<PathBuf>,
	pub(super) default: Option<String>,
}

impl CollectionSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.collections_dir.clone() {
			self.dir = Some(dir);
		}
		if let Some(name) = cli.collection.clone() {
			self.default = Some(name);
		}
	}

	pub(super) fn resolve(self) -> Result<(PathBuf, String)> {
		let dir = match self.dir {
			Some(dir) => dir,
			None => app_dirs::get_collections_dir()
				.context("failed to determine the collections directory")?,
		};

		let name = non_blank(self.default).ok_or_else(|| {
			anyhow!("no collection given; pass COLLECTION or set collection.default")
		})?;

		Ok((dir, sanitize_collection_name(&name)?))
	}
}
