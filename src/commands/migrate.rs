//! Migrate command implementation
//!
//! Always a dry run: the plan reports intended rewrites and never touches
//! source files. A missing mapping table aborts with an error; unmapped
//! paths are informational and leave the exit code at zero.

use std::path::Path;

use anyhow::Result;

use strata::application::MigrateUseCase;
use strata::config::Config;
use strata::infrastructure::JsonMappingRepository;

use crate::ui::context::UiContext;
use crate::ui::views::migrate as view;

pub fn cmd_migrate(
    root: &Path,
    paths: &[String],
    mapping_override: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = Config::load_or_default(Some(root));
    let verbose = super::effective_verbosity(verbose, config.output.verbosity);
    let ui = UiContext::new(json, verbose, &config);

    let repository = match mapping_override
        .map(Path::to_path_buf)
        .or_else(|| config.migration.mapping_file.clone())
    {
        Some(path) => JsonMappingRepository::with_path(path),
        None => JsonMappingRepository::new(),
    };
    let use_case = MigrateUseCase::new(repository);

    let plan = if paths.is_empty() {
        use_case.plan_all(root)?
    } else {
        use_case.plan(root, paths)?
    };

    if json {
        let mut out = std::io::stdout().lock();
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "migrate",
                "root": root.display().to_string(),
                "entries": plan.entries.len(),
            }),
        );
        for entry in &plan.entries {
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "entry",
                    "command": "migrate",
                    "source": entry.source,
                    "target": entry.target,
                }),
            );
        }
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "migrate",
                "mapped": plan.mapped_count(),
                "unmapped": plan.unmapped_count(),
            }),
        );
    } else {
        print!("{}", view::render_plan_header(root, ui.color, ui.unicode));
        print!("{}", view::render_plan_entries(&plan, ui.color));
        print!("{}", view::render_plan_summary(&plan, ui.color, ui.unicode));
    }

    Ok(())
}
