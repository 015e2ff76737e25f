use crate::index::AUTHOR_TOKEN_SEPARATOR;

/// Which field a string comes from, selecting the cleanup rules applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationKind {
	/// Author names: token separators become spaces and `". "` collapses to `"."`.
	Author,
	Other,
}

/// Trim, collapse doubled spaces and apply the field-specific rules.
pub fn normalize(value: &str, kind: NormalizationKind) -> String {
	let mut out: String = match kind {
		NormalizationKind::Author => value
			.chars()
			.map(|ch| if ch == AUTHOR_TOKEN_SEPARATOR { ' ' } else { ch })
			.collect(),
		NormalizationKind::Other => value.to_owned(),
	};

	out = out
		.trim_matches(|ch: char| u32::from(ch) <= 0x20)
		.to_owned();

	while out.contains("  ") {
		out = out.replace("  ", " ");
	}

	if kind == NormalizationKind::Author {
		while out.contains(". ") {
			out = out.replace(". ", ".");
		}
	}

	out
}

/// Lower-cased normalized form, the key used for comparisons.
pub fn fold(value: &str, kind: NormalizationKind) -> String {
	normalize(&value.to_lowercase(), kind)
}
