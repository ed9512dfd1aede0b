//! Strata CLI - layer dependency linter and migration planner
//!
//! Usage: strata [COMMAND]
//!
//! Commands:
//!   check    Check layer dependencies (exits non-zero on violations)
//!   migrate  Report the legacy path migration plan (dry run)
//!
//! Without a command, strata prints the migration dry-run report for the
//! current directory.

mod cli;
mod commands;
mod ui;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { paths, root }) => {
            commands::check::cmd_check(&root, &paths, cli.json, cli.verbose)
        }
        Some(Commands::Migrate {
            paths,
            root,
            mapping,
        }) => commands::migrate::cmd_migrate(&root, &paths, mapping.as_deref(), cli.json, cli.verbose),
        None => commands::migrate::cmd_migrate(Path::new("."), &[], None, cli.json, cli.verbose),
    }
}
