//! Check command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;

use strata::application::CheckUseCase;
use strata::config::Config;
use strata::infrastructure::discover_source_files;

use crate::ui::context::UiContext;
use crate::ui::views::check as view;

pub fn cmd_check(root: &Path, paths: &[PathBuf], json: bool, verbose: u8) -> Result<()> {
    let config = Config::load_or_default(Some(root));
    let verbose = super::effective_verbosity(verbose, config.output.verbosity);
    let ui = UiContext::new(json, verbose, &config);

    let use_case = CheckUseCase::new(&config)?;
    let files = if paths.is_empty() {
        discover_source_files(root)
    } else {
        paths.to_vec()
    };

    let result = if json {
        let mut out = std::io::stdout().lock();
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "check",
                "root": root.display().to_string(),
                "files": files.len(),
            }),
        );

        let result = use_case.execute_with_callback(root, &files, |outcome| {
            for violation in &outcome.violations {
                let _ = crate::ui::json::write_event(
                    &mut out,
                    &serde_json::json!({
                        "event": "violation",
                        "command": "check",
                        "file": violation.file.display().to_string(),
                        "line": violation.line,
                        "layer": violation.source_layer.name(),
                        "import": violation.specifier,
                        "message": violation.message(),
                    }),
                );
            }
            if let Some(error) = &outcome.error {
                let _ = crate::ui::json::write_event(
                    &mut out,
                    &serde_json::json!({
                        "event": "error",
                        "command": "check",
                        "message": error,
                    }),
                );
            }
        });

        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "checked": result.files_checked,
                "exempt": result.files_exempt,
                "violations": result.violations.len(),
                "errors": result.errors.len(),
                "success": result.is_success(),
            }),
        );

        result
    } else {
        print!("{}", view::render_check_header(root, ui.color, ui.unicode));

        let result = use_case.execute_with_callback(root, &files, |outcome| {
            print!(
                "{}",
                view::render_file_outcome(outcome, verbose, ui.color, ui.unicode)
            );
        });

        print!("{}", view::render_check_summary(&result, ui.color, ui.unicode));
        result
    };

    if !result.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
