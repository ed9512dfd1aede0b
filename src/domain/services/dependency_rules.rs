//! Dependency rules
//!
//! The layer-isolation contract as a data-driven table: each layer maps to
//! the set of layers it must not import. Note the asymmetry: presentation
//! may reach application (and domain), but never infrastructure, while
//! infrastructure itself may reach everything below presentation.

use crate::domain::value_objects::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRules {
    forbidden: Vec<(Layer, Vec<Layer>)>,
}

impl Default for DependencyRules {
    fn default() -> Self {
        Self {
            forbidden: vec![
                (
                    Layer::Domain,
                    vec![Layer::Application, Layer::Infrastructure, Layer::Presentation],
                ),
                (
                    Layer::Application,
                    vec![Layer::Infrastructure, Layer::Presentation],
                ),
                (Layer::Infrastructure, vec![Layer::Presentation]),
                (Layer::Presentation, vec![Layer::Infrastructure]),
            ],
        }
    }
}

impl DependencyRules {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Layers the given source layer must not import.
    pub fn forbidden_targets(&self, source: Layer) -> &[Layer] {
        self.forbidden
            .iter()
            .find(|(layer, _)| *layer == source)
            .map(|(_, targets)| targets.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_forbidden(&self, source: Layer, target: Layer) -> bool {
        self.forbidden_targets(source).contains(&target)
    }
}
