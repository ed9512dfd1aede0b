//! Layer value object
//!
//! The four architectural partitions. Allowed dependency direction:
//! presentation → application → domain; infrastructure → domain/application;
//! presentation ⇏ infrastructure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Domain,
    Application,
    Infrastructure,
    Presentation,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::Domain,
        Layer::Application,
        Layer::Infrastructure,
        Layer::Presentation,
    ];

    /// Lowercase layer name as used in paths and config files.
    pub fn name(self) -> &'static str {
        match self {
            Layer::Domain => "domain",
            Layer::Application => "application",
            Layer::Infrastructure => "infrastructure",
            Layer::Presentation => "presentation",
        }
    }

    /// Capitalized name used in violation messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Layer::Domain => "Domain",
            Layer::Application => "Application",
            Layer::Infrastructure => "Infrastructure",
            Layer::Presentation => "Presentation",
        }
    }

    /// The layer's public import alias (e.g. `@/domain`).
    pub fn alias(self) -> &'static str {
        match self {
            Layer::Domain => "@/domain",
            Layer::Application => "@/application",
            Layer::Infrastructure => "@/infrastructure",
            Layer::Presentation => "@/presentation",
        }
    }

    /// Alias pattern quoted in violation messages (e.g. `@/domain/*`).
    pub fn alias_pattern(self) -> &'static str {
        match self {
            Layer::Domain => "@/domain/*",
            Layer::Application => "@/application/*",
            Layer::Infrastructure => "@/infrastructure/*",
            Layer::Presentation => "@/presentation/*",
        }
    }

    /// Resolve the first alias segment (`infrastructure` in
    /// `@/infrastructure/auth`) to a layer.
    pub fn from_alias_segment(segment: &str) -> Option<Layer> {
        Layer::ALL.iter().copied().find(|l| l.name() == segment)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unrecognized layer names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayer(pub String);

impl fmt::Display for UnknownLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layer '{}'", self.0)
    }
}

impl std::error::Error for UnknownLayer {}

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::from_alias_segment(&s.to_lowercase()).ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        for layer in Layer::ALL {
            assert_eq!(layer.name(), layer.name().to_lowercase());
        }
    }

    #[test]
    fn display_names_are_capitalized() {
        assert_eq!(Layer::Domain.display_name(), "Domain");
        assert_eq!(Layer::Application.display_name(), "Application");
        assert_eq!(Layer::Infrastructure.display_name(), "Infrastructure");
        assert_eq!(Layer::Presentation.display_name(), "Presentation");
    }

    #[test]
    fn alias_matches_name() {
        for layer in Layer::ALL {
            assert_eq!(layer.alias(), format!("@/{}", layer.name()));
            assert_eq!(layer.alias_pattern(), format!("@/{}/*", layer.name()));
        }
    }

    #[test]
    fn from_alias_segment_round_trips() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_alias_segment(layer.name()), Some(layer));
        }
        assert_eq!(Layer::from_alias_segment("lib"), None);
    }

    #[test]
    fn from_str_accepts_mixed_case() {
        assert_eq!("Domain".parse::<Layer>().unwrap(), Layer::Domain);
        assert_eq!("INFRASTRUCTURE".parse::<Layer>().unwrap(), Layer::Infrastructure);
        assert!("ui".parse::<Layer>().is_err());
    }
}
