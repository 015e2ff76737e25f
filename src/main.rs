mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::{Action, SearchWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();
	bookdex::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_action(Action::from_cli(&cli), resolved)
}

/// Execute the requested action and print output in the chosen format.
fn run_action(action: Action, settings: ResolvedConfig) -> Result<()> {
	let format = settings.output;
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run(action)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
