use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `bookdex` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bookdex",
	version,
	long_version = long_version(),
	about = "Search a book collection index by author, title, series and genre",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "COLLECTION",
		help = "Collection to open (default: collection.default from the configuration)"
	)]
	pub(crate) collection: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BOOKDEX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "collections-dir",
		value_name = "PATH",
		help = "Directory holding <COLLECTION>/base index files (default: data directory)"
	)]
	pub(crate) collections_dir: Option<PathBuf>,
	#[arg(
		short = 'a',
		long,
		value_name = "NAME",
		help = "Author as whitespace-separated family name, given name and patronymic"
	)]
	pub(crate) author: Option<String>,
	#[arg(long, value_name = "NAME", help = "Author family name (overrides --author)")]
	pub(crate) surname: Option<String>,
	#[arg(long = "given-name", value_name = "NAME", help = "Author given name (overrides --author)")]
	pub(crate) given_name: Option<String>,
	#[arg(long, value_name = "NAME", help = "Author patronymic (overrides --author)")]
	pub(crate) patronymic: Option<String>,
	#[arg(short = 't', long, value_name = "TEXT", help = "Book title")]
	pub(crate) title: Option<String>,
	#[arg(short = 's', long, value_name = "TEXT", help = "Series name")]
	pub(crate) series: Option<String>,
	#[arg(short = 'g', long, value_name = "TEXT", help = "Genre")]
	pub(crate) genre: Option<String>,
	#[arg(short = 'd', long, value_name = "TEXT", help = "Publication date")]
	pub(crate) date: Option<String>,
	#[arg(
		short = 'k',
		long,
		value_name = "RATIO",
		allow_negative_numbers = true,
		help = "Share of each query token that must match, 0.0 to 1.0 (default: 0.8)"
	)]
	pub(crate) coincidence: Option<f64>,
	#[arg(
		short = 'e',
		long,
		help = "Keep only results whose fields equal the query values (default: disabled)"
	)]
	pub(crate) exact: bool,
	#[arg(
		long = "time-limit",
		value_name = "SECONDS",
		help = "Stop the search after this many seconds (default: unlimited)"
	)]
	pub(crate) time_limit: Option<f64>,
	#[arg(long, help = "List the distinct authors of the collection and exit")]
	pub(crate) authors: bool,
	#[arg(long, help = "Print the number of books in the collection and exit")]
	pub(crate) count: bool,
	#[arg(
		long = "books-path",
		help = "Print the collection root stored in the index header and exit"
	)]
	pub(crate) books_path: bool,
	#[arg(
		short = 'j',
		long,
		value_name = "NUM",
		help = "Limit the number of search threads (default: automatic)"
	)]
	pub(crate) threads: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long,
		action = ArgAction::Count,
		help = "Increase log verbosity; RUST_LOG takes precedence"
	)]
	pub(crate) verbose: u8,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Choose how to print the result (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
}
