use std::path::Path;

use anyhow::Result;
use bookdex::BookBaseEntry;
use serde_json::{Value, json};

use crate::workflow::Outcome;

/// Where a book lives: the file path, plus the member path for books inside
/// an archive.
fn location(entry: &BookBaseEntry) -> String {
	let path = entry.file_path().display();
	if entry.book.internal_path.is_empty() {
		path.to_string()
	} else {
		format!("{path}::{}", entry.book.internal_path)
	}
}

fn format_entry_plain(entry: &BookBaseEntry) -> String {
	let book = &entry.book;
	let location = location(entry);
	[
		location.as_str(),
		book.author.as_str(),
		book.title.as_str(),
		book.series.as_str(),
		book.genre.as_str(),
		book.date.as_str(),
	]
	.join("\t")
}

/// Print a plain-text representation of the outcome, one record per line.
pub(crate) fn print_plain(outcome: &Outcome) {
	match outcome {
		Outcome::BooksPath(root) => println!("{}", root.display()),
		Outcome::Count(count) => println!("{count}"),
		Outcome::Authors { cancelled: true, .. } | Outcome::Books { cancelled: true, .. } => {
			eprintln!("Search cancelled");
		}
		Outcome::Authors { names, .. } => {
			for name in names {
				println!("{name}");
			}
		}
		Outcome::Books { entries, .. } if entries.is_empty() => println!("No matches"),
		Outcome::Books { entries, .. } => {
			for entry in entries {
				println!("{}", format_entry_plain(entry));
			}
		}
	}
}

fn entry_json(entry: &BookBaseEntry) -> Value {
	let book = &entry.book;
	json!({
		"path": path_json(entry.file_path()),
		"internal_path": book.internal_path,
		"author": book.author,
		"title": book.title,
		"series": book.series,
		"genre": book.genre,
		"date": book.date,
	})
}

fn path_json(path: &Path) -> Value {
	Value::String(path.display().to_string())
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = match outcome {
		Outcome::BooksPath(root) => json!({ "books_path": path_json(root) }),
		Outcome::Count(count) => json!({ "count": count }),
		Outcome::Authors { names, cancelled } => json!({
			"cancelled": cancelled,
			"authors": names,
		}),
		Outcome::Books { entries, cancelled } => json!({
			"cancelled": cancelled,
			"count": entries.len(),
			"books": entries.iter().map(entry_json).collect::<Vec<_>>(),
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
