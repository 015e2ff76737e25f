use anyhow::{Result, ensure};

/// Trim a collection name and reject anything that would escape the
/// collections directory.
pub(super) fn sanitize_collection_name(value: &str) -> Result<String> {
	let name = value.trim();
	ensure!(!name.is_empty(), "collection name must not be empty");
	ensure!(
		name != "." && name != ".." && !name.contains(['/', '\\']),
		"collection name '{name}' must be a single directory name"
	);
	Ok(name.to_string())
}

/// Treat blank strings from configuration as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}
