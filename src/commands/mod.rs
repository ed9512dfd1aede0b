//! Command implementations for the strata binary
//!
//! Each command loads configuration, drives a use case from the library
//! crate, and renders through `crate::ui`.

pub mod check;
pub mod migrate;

use strata::config::Verbosity;

/// Effective verbosity: config can raise or silence the CLI `-v` count.
pub(crate) fn effective_verbosity(cli_verbose: u8, config: Verbosity) -> u8 {
    match config {
        Verbosity::Quiet => 0,
        Verbosity::Normal => cli_verbose,
        Verbosity::Verbose => cli_verbose.max(1),
        Verbosity::Debug => cli_verbose.max(2),
    }
}
