use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["bookdex"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.collection, None);
	assert_eq!(parsed.output, None);
	assert!(!parsed.exact);
}

#[test]
fn search_fields_are_collected() {
	let parsed = CliArgs::parse_from([
		"bookdex", "fantasy", "-t", "hobbit", "--surname", "Tolkien", "-k", "0.9", "-e", "-o",
		"json", "-vv",
	]);
	assert_eq!(parsed.collection.as_deref(), Some("fantasy"));
	assert_eq!(parsed.title.as_deref(), Some("hobbit"));
	assert_eq!(parsed.surname.as_deref(), Some("Tolkien"));
	assert_eq!(parsed.coincidence, Some(0.9));
	assert!(parsed.exact);
	assert_eq!(parsed.output, Some(OutputFormat::Json));
	assert_eq!(parsed.verbose, 2);
}

#[test]
fn negative_coincidence_is_accepted_for_clamping() {
	let parsed = CliArgs::parse_from(["bookdex", "fantasy", "-k", "-1"]);
	assert_eq!(parsed.coincidence, Some(-1.0));
}
