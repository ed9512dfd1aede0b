//! Styling primitives
//!
//! ANSI styling helpers and the unicode/ascii icon sets shared by the
//! command views.

/// Icons for output rendering
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub check: &'static str,
    pub cross: &'static str,
    pub arrow: &'static str,
    pub skip: &'static str,
    pub warn: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            arrow: "→",
            skip: "○",
            warn: "⚠",
        }
    }

    pub fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            arrow: "->",
            skip: "[ ]",
            warn: "[!]",
        }
    }

    pub fn for_unicode(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Wrap `text` in an ANSI style when color is enabled.
pub fn paint(color: bool, style: &str, text: &str) -> String {
    if color {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}
