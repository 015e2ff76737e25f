//! Resolve configuration and collection directories for `bookdex`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "bookdex";
const APPLICATION: &str = "bookdex";

const CONFIG_DIR_ENV: &str = "BOOKDEX_CONFIG_DIR";
const DATA_DIR_ENV: &str = "BOOKDEX_DATA_DIR";

/// Sub-directory of the data directory holding one folder per collection.
const COLLECTIONS_DIR: &str = "collections";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for bookdex"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that holds collection indexes.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default directory searched for `<name>/base` collection files.
pub fn get_collections_dir() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(COLLECTIONS_DIR))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		// SAFETY: the variable is unique to this test.
		unsafe {
			env::set_var("BOOKDEX_TEST_EMPTY_DIR", "");
		}
		assert_eq!(dir_from_env("BOOKDEX_TEST_EMPTY_DIR"), None);
		unsafe {
			env::set_var("BOOKDEX_TEST_EMPTY_DIR", "/srv/books");
		}
		assert_eq!(
			dir_from_env("BOOKDEX_TEST_EMPTY_DIR"),
			Some(PathBuf::from("/srv/books"))
		);
		unsafe {
			env::remove_var("BOOKDEX_TEST_EMPTY_DIR");
		}
	}
}
