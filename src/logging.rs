//! Diagnostic output for the `bookdex` binary.
//!
//! The library only emits `tracing` events; embedders install their own
//! subscriber. The binary writes them to stderr, filtered by `RUST_LOG` or,
//! when that is unset, by the verbosity given on the command line.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
	let _ = tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.with(filter)
		.try_init();
}
