//! Import extraction
//!
//! Pulls module specifiers out of TypeScript/JavaScript source text:
//! `import ... from '..'`, `export ... from '..'`, side-effect imports,
//! `require(..)` and dynamic `import(..)` calls. Statements may span
//! multiple lines. An import statement that cannot be reduced to a
//! specifier is a tooling error, not a violation.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{StrataError, StrataResult};

/// An extracted import with the 1-based line of its statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub specifier: String,
    pub line: usize,
}

impl ImportStatement {
    pub fn new(specifier: impl Into<String>, line: usize) -> Self {
        Self {
            specifier: specifier.into(),
            line,
        }
    }
}

/// Statements longer than this are treated as unparseable.
const MAX_STATEMENT_LINES: usize = 16;

static STATEMENT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:import|export)\b").expect("static regex"));
static FROM_SPECIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bfrom\s*['"]([^'"]+)['"]"#).expect("static regex"));
static SIDE_EFFECT_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*import\s*['"]([^'"]+)['"]"#).expect("static regex"));
static REQUIRE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\brequire\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("static regex"));
static DYNAMIC_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bimport\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("static regex"));
static FROM_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfrom\b").expect("static regex"));

/// Extract every import specifier from `text`.
pub fn extract_imports(file: &Path, text: &str) -> StrataResult<Vec<ImportStatement>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut imports = Vec::new();

    // Expression-position imports can appear anywhere, including inside
    // statement continuations, so they get their own pass.
    for (idx, line) in lines.iter().enumerate() {
        if is_comment(line) {
            continue;
        }
        for caps in REQUIRE_CALL.captures_iter(line) {
            imports.push(ImportStatement::new(&caps[1], idx + 1));
        }
        for caps in DYNAMIC_IMPORT.captures_iter(line) {
            imports.push(ImportStatement::new(&caps[1], idx + 1));
        }
    }

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_comment(line) || !STATEMENT_START.is_match(line) {
            i += 1;
            continue;
        }

        let start = i;
        let mut statement = line.to_string();
        while !has_specifier(&statement)
            && !statement.trim_end().ends_with(';')
            && i + 1 < lines.len()
            && i - start < MAX_STATEMENT_LINES
            && !STATEMENT_START.is_match(lines[i + 1])
        {
            i += 1;
            statement.push(' ');
            statement.push_str(lines[i]);
        }

        if let Some(import) = finalize_statement(file, start + 1, line, &statement)? {
            imports.push(import);
        }
        i += 1;
    }

    imports.sort_by_key(|import| import.line);
    Ok(imports)
}

fn finalize_statement(
    file: &Path,
    line: usize,
    first_line: &str,
    statement: &str,
) -> StrataResult<Option<ImportStatement>> {
    if let Some(caps) = FROM_SPECIFIER.captures(statement) {
        return Ok(Some(ImportStatement::new(&caps[1], line)));
    }
    if let Some(caps) = SIDE_EFFECT_IMPORT.captures(statement) {
        return Ok(Some(ImportStatement::new(&caps[1], line)));
    }
    // `import foo = require('x')` and statement-position `import(..)` were
    // already collected by the expression pass.
    if REQUIRE_CALL.is_match(statement) || DYNAMIC_IMPORT.is_match(statement) {
        return Ok(None);
    }

    let is_import = statement.trim_start().starts_with("import");
    if is_import || FROM_KEYWORD.is_match(statement) {
        return Err(StrataError::UnparseableImport {
            file: file.to_path_buf(),
            line,
            snippet: snippet(first_line),
        });
    }

    // export declarations without a `from` clause are not imports
    Ok(None)
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

fn has_specifier(statement: &str) -> bool {
    FROM_SPECIFIER.is_match(statement) || SIDE_EFFECT_IMPORT.is_match(statement)
}

fn snippet(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.len() > 80 {
        format!("{}...", &trimmed[..77])
    } else {
        trimmed.to_string()
    }
}
