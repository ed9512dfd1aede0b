//! Terminal UI for the strata binary
//!
//! - `terminal` - capability detection (tty, color, unicode, CI)
//! - `context` - resolved per-invocation UI settings
//! - `output` - ANSI styling and icon sets
//! - `json` - NDJSON event emission for `--json`
//! - `views` - per-command report rendering

pub mod context;
pub mod json;
pub mod output;
pub mod terminal;
pub mod views;
