//! Configured entry point for tracemark.
//!
//! This module provides the `Tracemark` struct, which holds one highlight
//! configuration and applies it to typed or JSON program trees.

use serde_json::Value;
use tracemark_core::TraceTree;
use tracemark_decorate::{HighlightConfig, Highlighter, MatchDirection, Node};

use crate::error::Result;
use crate::json::{check_config, highlight_json};

/// A configured highlighter.
///
/// Create one with [`Tracemark::new`], [`Tracemark::from_settings`] or
/// [`Tracemark::builder`].
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tracemark::{MatchDirection, Tracemark};
///
/// let tm = Tracemark::builder()
///     .field("selected")
///     .direction(MatchDirection::Forward)
///     .build()
///     .unwrap();
///
/// let selected = json!({"cons": "Cons", "num": "1", "trace": null});
/// let tree = json!({"cons": "Con", "tra": selected.clone()});
/// let out = tm.highlight_json(Some(&selected), &tree).unwrap();
/// assert_eq!(out["selected"], json!(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracemark {
    highlighter: Highlighter,
}

impl Tracemark {
    /// Create with default settings (forward matching into `isHighlighted`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for configuration.
    pub fn builder() -> TracemarkBuilder {
        TracemarkBuilder::new()
    }

    /// Create from the host's JSON settings.
    ///
    /// Every key is optional; unknown directions and reserved field names
    /// are rejected.
    pub fn from_settings(settings: &Value) -> Result<Self> {
        let config: HighlightConfig = serde_json::from_value(settings.clone())?;
        Self::from_config(config)
    }

    /// Create from an explicit configuration.
    ///
    /// Fails when the field name is one the JSON encoding reserves
    /// (`"tra"` or `"$seq"`).
    pub fn from_config(config: HighlightConfig) -> Result<Self> {
        check_config(&config)?;
        Ok(Self {
            highlighter: Highlighter::new(config),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &HighlightConfig {
        self.highlighter.config()
    }

    /// Highlight a typed program tree.
    pub fn highlight(&self, selected: Option<&TraceTree>, tree: &Node) -> Node {
        self.highlighter.apply(selected, tree)
    }

    /// Highlight a JSON program tree against a JSON selection.
    pub fn highlight_json(&self, selected: Option<&Value>, tree: &Value) -> Result<Value> {
        highlight_json(selected, tree, self.config())
    }
}

/// Builder for [`Tracemark`].
#[derive(Debug, Clone, Default)]
pub struct TracemarkBuilder {
    config: HighlightConfig,
}

impl TracemarkBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write flags into `field` instead of `isHighlighted`.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.config = self.config.with_field(field);
        self
    }

    /// Set the matching direction.
    pub fn direction(mut self, direction: MatchDirection) -> Self {
        self.config = self.config.with_direction(direction);
        self
    }

    /// Finish configuration.
    pub fn build(self) -> Result<Tracemark> {
        Tracemark::from_config(self.config)
    }
}
