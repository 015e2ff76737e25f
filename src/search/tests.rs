use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::*;
use crate::index::testing::{book, file};
use crate::index::{BookBaseEntry, BookRecord, CollectionIndex};

fn hobbit_index(root: &Path) -> CollectionIndex {
	CollectionIndex::new(
		root,
		vec![file(
			"a/b.fb2",
			vec![book("Tolkien\u{7}John\u{7}Ronald", "The Hobbit")],
		)],
	)
}

fn library() -> CollectionIndex {
	let mut dune = book("Herbert\u{7}Frank\u{7}", "Dune");
	dune.series = "Dune Chronicles".into();
	dune.genre = "sf, adventure".into();
	dune.date = "1965".into();

	let mut messiah = book("Herbert\u{7}Frank\u{7}", "Dune Messiah");
	messiah.series = "Dune Chronicles".into();
	messiah.genre = "sf".into();

	let mut brian = book("Herbert\u{7}Brian\u{7}", "Sandworms of Dune");
	brian.genre = "sf".into();

	let mut war = book("Tolstoy\u{7}Lev\u{7}Nikolayevich", "War  and Peace ");
	war.genre = "prose_history".into();

	CollectionIndex::new(
		"/library",
		vec![
			file("herbert.zip", vec![dune, messiah]),
			file("brian.fb2", vec![brian]),
			file("tolstoy/war.epub", vec![war]),
		],
	)
}

fn titles(results: &[BookBaseEntry]) -> HashSet<String> {
	results.iter().map(|entry| entry.book.title.clone()).collect()
}

fn set(values: &[&str]) -> HashSet<String> {
	values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn title_search_resolves_the_file_path() {
	let index = hobbit_index(Path::new("/books"));
	let token = CancellationToken::new();

	let results = SearchOrchestrator::new(&index, &token)
		.search(&SearchQuery::new().with_title("hobbit"), 0.8);

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].file_path, PathBuf::from("/books/a/b.fb2"));
	assert_eq!(results[0].book.title, "The Hobbit");
}

#[test]
fn surname_tolerates_one_letter_below_full_coincidence() {
	let index = hobbit_index(Path::new("/books"));
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);
	let query = SearchQuery::new().with_author_parts("Tolkin", "", "");

	assert_eq!(orchestrator.search(&query, 0.8).len(), 1);
	assert!(orchestrator.search(&query, 1.0).is_empty());
}

#[test]
fn later_phases_narrow_earlier_results() {
	let index = library();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	let herbert = SearchQuery::new().with_author_parts("Herbert", "", "");
	assert_eq!(
		titles(&orchestrator.search(&herbert, 1.0)),
		set(&["Dune", "Dune Messiah", "Sandworms of Dune"])
	);

	let frank = SearchQuery::new().with_author_parts("Herbert", "Frank", "");
	assert_eq!(
		titles(&orchestrator.search(&frank, 1.0)),
		set(&["Dune", "Dune Messiah"])
	);

	let messiah = frank.clone().with_title("messiah");
	assert_eq!(titles(&orchestrator.search(&messiah, 1.0)), set(&["Dune Messiah"]));
}

#[test]
fn first_phase_may_be_a_later_field() {
	let index = library();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	let given = SearchQuery::new().with_author_parts("", "Brian", "");
	assert_eq!(titles(&orchestrator.search(&given, 1.0)), set(&["Sandworms of Dune"]));

	let series = SearchQuery::new().with_series("dune chron").with_genre("adventure");
	assert_eq!(titles(&orchestrator.search(&series, 1.0)), set(&["Dune"]));
}

#[test]
fn empty_phase_short_circuits() {
	let index = library();
	let token = CancellationToken::new();
	let query = SearchQuery::new().with_author_parts("Nobody", "", "").with_title("Dune");

	assert!(SearchOrchestrator::new(&index, &token).search(&query, 1.0).is_empty());
}

#[test]
fn blank_query_lists_everything_in_source_order() {
	let index = library();
	let token = CancellationToken::new();

	let results = SearchOrchestrator::new(&index, &token).search(&SearchQuery::new(), 0.5);

	let listed: Vec<_> = results.iter().map(|entry| entry.book.title.as_str()).collect();
	assert_eq!(
		listed,
		vec!["Dune", "Dune Messiah", "Sandworms of Dune", "War and Peace"]
	);
	assert_eq!(results[3].file_path, PathBuf::from("/library/tolstoy/war.epub"));
}

#[test]
fn fallback_matches_the_flattened_index() {
	let index = hobbit_index(Path::new("/books"));
	let token = CancellationToken::new();
	let results = SearchOrchestrator::new(&index, &token)
		.search(&SearchQuery::new().with_author_parts("", "", ""), 1.0);

	let mut expected = index.entries();
	expected[0].book.author = "Tolkien John Ronald".into();
	assert_eq!(results, expected);
}

#[test]
fn results_are_display_normalized() {
	let index = library();
	let token = CancellationToken::new();
	let results = SearchOrchestrator::new(&index, &token)
		.search(&SearchQuery::new().with_title("war"), 1.0);

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].book.title, "War and Peace");
	assert_eq!(results[0].book.author, "Tolstoy Lev Nikolayevich");
}

#[test]
fn exact_mode_requires_whole_values() {
	let index = CollectionIndex::new(
		"/books",
		vec![file("smith.fb2", vec![book("Smith, John", "Collected")])],
	);
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	let whole = SearchQuery::new().with_author("Smith");
	assert_eq!(orchestrator.search(&whole, EXACT_COINCIDENCE).len(), 1);

	let partial = SearchQuery::new().with_author("Smi");
	assert_eq!(orchestrator.search(&partial, 0.99).len(), 1);
	assert!(orchestrator.search(&partial, EXACT_COINCIDENCE).is_empty());
}

#[test]
fn exact_mode_filters_the_fallback_by_date() {
	let index = library();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);
	let query = SearchQuery::new().with_date("1965");

	assert_eq!(orchestrator.search(&query, 0.5).len(), 4);
	assert_eq!(titles(&orchestrator.search(&query, EXACT_COINCIDENCE)), set(&["Dune"]));
}

#[test]
fn out_of_range_coincidence_is_clamped() {
	assert_eq!(resolve_coincidence(0.4), (0.4, false));
	assert_eq!(resolve_coincidence(-1.0), (CLAMPED_COINCIDENCE, false));
	assert_eq!(resolve_coincidence(1.5), (CLAMPED_COINCIDENCE, true));
	assert_eq!(resolve_coincidence(f64::NAN), (CLAMPED_COINCIDENCE, false));

	let index = hobbit_index(Path::new("/books"));
	let token = CancellationToken::new();
	let query = SearchQuery::new().with_title("hobbi");
	assert_eq!(SearchOrchestrator::new(&index, &token).search(&query, -3.0).len(), 1);
}

#[test]
fn unloaded_index_yields_nothing() {
	let index = CollectionIndex::default();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	assert!(orchestrator.search(&SearchQuery::new().with_title("x"), 0.5).is_empty());
	assert!(orchestrator.search(&SearchQuery::new(), 0.5).is_empty());
}

fn big_index() -> CollectionIndex {
	let books: Vec<BookRecord> = (0..2_000)
		.map(|n| book("Author\u{7}Same\u{7}", &format!("Volume {n}")))
		.collect();
	CollectionIndex::new("/big", vec![file("all.zip", books)])
}

#[test]
fn cancellation_observed_mid_search_empties_the_result() {
	let index = big_index();
	let token = CancellationToken::new();
	token.cancel();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	assert!(orchestrator.run(&SearchQuery::new().with_title("volume"), 1.0).is_empty());
	assert!(orchestrator.run(&SearchQuery::new(), 1.0).is_empty());
	assert!(orchestrator.run(&SearchQuery::new().with_author("Author"), EXACT_COINCIDENCE).is_empty());
}

#[test]
fn matches_gathered_before_a_cancel_are_discarded() {
	let index = library();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);
	let query = SearchQuery::new().with_author_parts("Herbert", "", "");

	let gathered = orchestrator.run_phases(&query, 1.0).expect("surname phase runs");
	assert_eq!(gathered.len(), 3);
	assert_eq!(orchestrator.finish(gathered.clone(), &query, false).len(), 3);

	token.cancel();
	assert!(orchestrator.finish(gathered.clone(), &query, false).is_empty());
	assert!(orchestrator.finish(gathered, &query, true).is_empty());
}

#[test]
fn cancel_between_phases_empties_the_result() {
	let index = library();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	let surname = SearchQuery::new().with_author_parts("Herbert", "", "");
	let gathered = orchestrator.run_phases(&surname, 1.0).expect("surname phase runs");
	assert!(!gathered.is_empty());

	token.cancel();
	let narrowed = SearchQuery::new().with_author_parts("Herbert", "Frank", "");
	assert_eq!(orchestrator.run_phases(&narrowed, 1.0), Some(Vec::new()));
	assert!(orchestrator.run(&narrowed, 1.0).is_empty());
	assert!(orchestrator.run(&narrowed, EXACT_COINCIDENCE).is_empty());
}

#[test]
fn blank_query_runs_no_phase() {
	let index = library();
	let token = CancellationToken::new();
	let orchestrator = SearchOrchestrator::new(&index, &token);

	assert_eq!(orchestrator.run_phases(&SearchQuery::new(), 1.0), None);
	assert_eq!(orchestrator.run_phases(&SearchQuery::new().with_date("1965"), 1.0), None);
}

#[test]
fn search_resets_the_token_on_entry() {
	let index = big_index();
	let token = CancellationToken::new();
	token.cancel();

	let results = SearchOrchestrator::new(&index, &token).search(&SearchQuery::new().with_title("volume"), 1.0);
	assert_eq!(results.len(), 2_000);
}

#[test]
fn concurrent_cancel_is_all_or_nothing() {
	let index = big_index();
	let token = CancellationToken::new();

	let results = std::thread::scope(|scope| {
		let search = scope.spawn(|| {
			SearchOrchestrator::new(&index, &token)
				.search(&SearchQuery::new().with_author_parts("Author", "Same", ""), 1.0)
		});
		token.cancel();
		search.join().unwrap()
	});

	assert!(results.is_empty() || results.len() == 2_000);
}
