use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Collections dir: {}", config.collections_dir.display());
	println!("  Collection: {}", config.collection);
	println!("  Coincidence: {}", config.search.coincidence);
	println!("  Exact match: {}", bool_to_word(config.search.exact));
	println!(
		"  Threads: {}",
		config
			.search
			.threads
			.map_or_else(|| "auto".to_string(), |n| n.to_string())
	);
	println!(
		"  Time limit: {}",
		config
			.search
			.time_limit()
			.map_or_else(|| "none".to_string(), |limit| format!("{:.3}s", limit.as_secs_f64()))
	);
	println!("  Output: {}", config.output.as_str());
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
