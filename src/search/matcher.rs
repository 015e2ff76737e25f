use super::normalize::{NormalizationKind, fold};

/// Decide whether `query` occurs in `source` at a word start with at least
/// `coincidence` of its characters matching consecutively.
///
/// Candidate alignments are the start of `source` and every position right
/// after a space. At each one the characters of `query` are compared in order
/// until the first mismatch; every match adds `1 / len(query)` to the weight
/// and the function returns as soon as the weight reaches `coincidence`.
/// Starts are bounded so that at least `len(query) * coincidence` characters of
/// `source` remain, which lets a partial token match below `1.0` while `1.0`
/// still requires the whole query.
///
/// `coincidence` is expected in `[0, 1]`; callers clamp it.
pub fn matches(query: &str, source: &str, coincidence: f64, kind: NormalizationKind) -> bool {
	let query: Vec<char> = fold(query, kind).chars().collect();
	let source: Vec<char> = fold(source, kind).chars().collect();
	if query.is_empty() || source.is_empty() || query.len() > source.len() {
		return false;
	}

	let len = query.len();
	let required = (len as f64 * coincidence).ceil() as usize;
	let last_start = source.len() - required.min(len);

	for start in 0..=last_start {
		if start > 0 && source[start - 1] != ' ' {
			continue;
		}

		let mut matched = 0usize;
		for (offset, ch) in query.iter().enumerate() {
			match source.get(start + offset) {
				Some(candidate) if candidate == ch => {
					matched += 1;
					if matched as f64 / len as f64 >= coincidence {
						return true;
					}
				}
				_ => break,
			}
		}
	}

	false
}
