use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strata - layer dependency linter and migration planner
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'strata' without arguments to print the legacy migration dry-run report.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check layer dependencies (exits non-zero on violations)
    Check {
        /// Project-relative files to check (default: every source file)
        paths: Vec<PathBuf>,

        /// Project root to check against
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Report the legacy path migration plan (dry run, writes nothing)
    Migrate {
        /// Legacy paths to plan (default: every mapping table entry)
        paths: Vec<String>,

        /// Project root holding the mapping table
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Mapping table location (default: tools/migration/layer-mapping.json)
        #[arg(long)]
        mapping: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["strata"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["strata", "check"]).unwrap();
        if let Some(Commands::Check { paths, root }) = cli.command {
            assert!(paths.is_empty());
            assert_eq!(root, PathBuf::from("."));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_paths() {
        let cli = Cli::try_parse_from([
            "strata",
            "check",
            "src/domain/member.ts",
            "app/page.tsx",
            "--root",
            "webapp",
        ])
        .unwrap();

        if let Some(Commands::Check { paths, root }) = cli.command {
            assert_eq!(paths.len(), 2);
            assert_eq!(root, PathBuf::from("webapp"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_migrate() {
        let cli = Cli::try_parse_from(["strata", "migrate"]).unwrap();
        if let Some(Commands::Migrate { paths, root, mapping }) = cli.command {
            assert!(paths.is_empty());
            assert_eq!(root, PathBuf::from("."));
            assert_eq!(mapping, None);
        } else {
            panic!("Expected Migrate command");
        }
    }

    #[test]
    fn test_cli_parse_migrate_with_mapping_override() {
        let cli = Cli::try_parse_from([
            "strata",
            "migrate",
            "lib/auth.ts",
            "--mapping",
            "migration/mapping.json",
        ])
        .unwrap();

        if let Some(Commands::Migrate { paths, mapping, .. }) = cli.command {
            assert_eq!(paths, vec!["lib/auth.ts".to_string()]);
            assert_eq!(mapping, Some(PathBuf::from("migration/mapping.json")));
        } else {
            panic!("Expected Migrate command");
        }
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["strata", "--json", "check"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["strata", "migrate", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Migrate { .. })));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["strata", "-vv", "check"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
