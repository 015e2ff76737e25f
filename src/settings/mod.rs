//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] built
//! from configuration files, `BOOKDEX__*` environment variables and CLI
//! overrides, in increasing order of precedence.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
