use std::path::Path;

use strata::application::{CheckResult, FileOutcome, FileStatus};

use crate::ui::output::{paint, Icons, BOLD, DIM, GREEN, RED, YELLOW};

pub fn render_check_header(root: &Path, color: bool, unicode: bool) -> String {
    let title = if unicode {
        "🔍 Strata Check"
    } else {
        "Strata Check"
    };
    format!(
        "{}\n{}\n\n",
        paint(color, BOLD, title),
        paint(color, DIM, &format!("Root: {}", root.display()))
    )
}

/// One line per file; pass/exempt lines only appear in verbose mode.
pub fn render_file_outcome(
    outcome: &FileOutcome,
    verbose: u8,
    color: bool,
    unicode: bool,
) -> String {
    let icons = Icons::for_unicode(unicode);
    let mut out = String::new();

    match outcome.status() {
        FileStatus::Pass => {
            if verbose > 0 {
                let layer = outcome.layer.map(|l| l.name()).unwrap_or("unclassified");
                out.push_str(&format!(
                    "  {} {} {}\n",
                    paint(color, GREEN, icons.check),
                    outcome.path.display(),
                    paint(color, DIM, &format!("({})", layer))
                ));
            }
        }
        FileStatus::Exempt => {
            if verbose > 1 {
                out.push_str(&format!(
                    "  {} {} {}\n",
                    icons.skip,
                    outcome.path.display(),
                    paint(color, DIM, "(exempt)")
                ));
            }
        }
        FileStatus::Violations => {
            for violation in &outcome.violations {
                out.push_str(&format!(
                    "  {} {}:{}: {} {}\n",
                    paint(color, RED, icons.cross),
                    violation.file.display(),
                    violation.line,
                    violation.message(),
                    paint(color, DIM, &format!("({})", violation.specifier))
                ));
            }
        }
        FileStatus::Error => {
            if let Some(error) = &outcome.error {
                out.push_str(&format!("  {} {}\n", paint(color, YELLOW, icons.warn), error));
            }
        }
    }

    out
}

pub fn render_check_summary(result: &CheckResult, color: bool, unicode: bool) -> String {
    let icons = Icons::for_unicode(unicode);

    let status = if !result.violations.is_empty() {
        paint(color, RED, &format!("{} Check FAILED", icons.cross))
    } else if !result.errors.is_empty() {
        paint(color, YELLOW, &format!("{} Check incomplete", icons.warn))
    } else {
        paint(color, GREEN, &format!("{} All layer checks passed", icons.check))
    };

    format!(
        "\n{}\n{}\n",
        status,
        paint(
            color,
            DIM,
            &format!(
                "{} checked, {} exempt, {} violations, {} errors",
                result.files_checked,
                result.files_exempt,
                result.violations.len(),
                result.errors.len()
            )
        )
    )
}
