//! Highlight configuration
//!
//! [`HighlightConfig`] selects the decoration field and the matching
//! direction. It deserializes from the host's settings with every field
//! optional:
//!
//! ```
//! use tracemark_decorate::{HighlightConfig, MatchDirection};
//!
//! let config: HighlightConfig = serde_json::from_str(r#"{"direction": "backward"}"#).unwrap();
//! assert_eq!(config.field, "isHighlighted");
//! assert_eq!(config.direction, MatchDirection::Backward);
//! ```

use serde::{Deserialize, Serialize};
use tracemark_core::TraceTree;

use crate::matching::{highlight_as, MatchDirection, HIGHLIGHT_FIELD};
use crate::node::Node;

/// Settings for a highlighting pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Field that receives the flag
    pub field: String,
    /// Relation between selection and node origin
    pub direction: MatchDirection,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            field: HIGHLIGHT_FIELD.to_string(),
            direction: MatchDirection::Forward,
        }
    }
}

impl HighlightConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field name
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Use a different matching direction
    pub fn with_direction(mut self, direction: MatchDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Applies one configuration to any number of selections and trees
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    config: HighlightConfig,
}

impl Highlighter {
    /// Create a highlighter from a configuration
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Produce a decorated copy of `tree` for the given selection
    pub fn apply(&self, selected: Option<&TraceTree>, tree: &Node) -> Node {
        highlight_as(&self.config.field, self.config.direction, selected, tree)
    }

    /// Whether `node` carries this highlighter's flag set to `true`
    pub fn is_highlighted(&self, node: &Node) -> bool {
        node.flag(&self.config.field).unwrap_or(false)
    }
}
