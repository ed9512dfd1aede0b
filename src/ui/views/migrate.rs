use std::path::Path;

use strata::MigrationPlan;

use crate::ui::output::{paint, Icons, BOLD, DIM, GREEN, YELLOW};

pub fn render_plan_header(root: &Path, color: bool, unicode: bool) -> String {
    let title = if unicode {
        "📋 Strata Migration Plan (dry run)"
    } else {
        "Strata Migration Plan (dry run)"
    };
    format!(
        "{}\n{}\n\n",
        paint(color, BOLD, title),
        paint(color, DIM, &format!("Root: {}", root.display()))
    )
}

/// Entry lines always use a literal ` -> ` separator; the report format is
/// consumed by follow-up tooling and stays stable across icon sets.
pub fn render_plan_entries(plan: &MigrationPlan, color: bool) -> String {
    let mut out = String::new();
    for entry in &plan.entries {
        match &entry.target {
            Some(target) => {
                out.push_str(&format!("  {} -> {}\n", entry.source, target));
            }
            None => {
                out.push_str(&format!(
                    "  {} -> {}\n",
                    entry.source,
                    paint(color, YELLOW, "(unmapped)")
                ));
            }
        }
    }
    out
}

pub fn render_plan_summary(plan: &MigrationPlan, color: bool, unicode: bool) -> String {
    let icons = Icons::for_unicode(unicode);

    let status = if plan.is_fully_mapped() {
        paint(
            color,
            GREEN,
            &format!("{} {} paths mapped", icons.check, plan.mapped_count()),
        )
    } else {
        paint(
            color,
            YELLOW,
            &format!(
                "{} {} mapped, {} need manual migration",
                icons.warn,
                plan.mapped_count(),
                plan.unmapped_count()
            ),
        )
    };

    format!("\n{}\n", status)
}
