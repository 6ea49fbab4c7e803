//! Configuration types for Sapling tree layout.
//!
//! This module provides the structures that control spacing and depth of a
//! layout. All types implement [`serde::Deserialize`] for flexible loading
//! from external sources; every field falls back to its default when absent.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root used by front ends.
//! - [`LayoutConfig`] - Spacing, node size, depth limit and drawable extents.
//!
//! # Example
//!
//! ```
//! # use sapling::config::LayoutConfig;
//! let config = LayoutConfig::default().with_level_separation(2.0);
//! assert_eq!(config.level_separation(), 2.0);
//! assert_eq!(config.sibling_separation(), 1.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use sapling_core::geometry::Bounds;

use crate::error::LayoutError;

/// Top-level application configuration.
///
/// Groups the [`LayoutConfig`] under a `[layout]` section so front ends can
/// grow further sections without breaking existing files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Spacing and depth settings for [`TreeLayout`](crate::TreeLayout).
///
/// Distances are in abstract layout units. `node_size` is the half-width
/// unit used in clearance math: two adjacent nodes always keep
/// `2 * node_size` plus the relevant separation between their centers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical distance between adjacent depth levels.
    level_separation: f32,

    /// Minimum horizontal gap between adjacent siblings.
    sibling_separation: f32,

    /// Minimum horizontal gap between neighboring subtrees.
    subtree_separation: f32,

    /// Half-width unit of a node.
    node_size: f32,

    /// Deepest level that is positioned; the root is level 0.
    max_depth: usize,

    /// Rectangle every coordinate must fall into, if any.
    extents: Option<Bounds>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            level_separation: 1.25,
            sibling_separation: 1.0,
            subtree_separation: 1.0,
            node_size: 0.25,
            max_depth: usize::MAX,
            extents: None,
        }
    }
}

impl LayoutConfig {
    /// Set the vertical distance between levels
    pub fn with_level_separation(mut self, separation: f32) -> Self {
        self.level_separation = separation;
        self
    }

    /// Set the minimum gap between siblings
    pub fn with_sibling_separation(mut self, separation: f32) -> Self {
        self.sibling_separation = separation;
        self
    }

    /// Set the minimum gap between neighboring subtrees
    pub fn with_subtree_separation(mut self, separation: f32) -> Self {
        self.subtree_separation = separation;
        self
    }

    /// Set the half-width unit of a node
    pub fn with_node_size(mut self, size: f32) -> Self {
        self.node_size = size;
        self
    }

    /// Set the deepest level to position
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Restrict every coordinate to the given rectangle
    pub fn with_extents(mut self, extents: Bounds) -> Self {
        self.extents = Some(extents);
        self
    }

    /// Returns the vertical distance between levels
    pub fn level_separation(&self) -> f32 {
        self.level_separation
    }

    /// Returns the minimum gap between siblings
    pub fn sibling_separation(&self) -> f32 {
        self.sibling_separation
    }

    /// Returns the minimum gap between neighboring subtrees
    pub fn subtree_separation(&self) -> f32 {
        self.subtree_separation
    }

    /// Returns the half-width unit of a node
    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    /// Returns the deepest level to position
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the configured drawable rectangle, if any
    pub fn extents(&self) -> Option<Bounds> {
        self.extents
    }

    /// Checks that every distance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let distances = [
            ("level_separation", self.level_separation),
            ("sibling_separation", self.sibling_separation),
            ("subtree_separation", self.subtree_separation),
            ("node_size", self.node_size),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::Config(format!(
                    "`{name}` must be a finite, non-negative number, got {value}"
                )));
            }
        }

        let inverted = self
            .extents
            .is_some_and(|extents| extents.width() < 0.0 || extents.height() < 0.0);
        if inverted {
            return Err(LayoutError::Config(
                "`extents` must have min_x <= max_x and min_y <= max_y".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_walker_settings() {
        let config = LayoutConfig::default();
        assert_eq!(config.level_separation(), 1.25);
        assert_eq!(config.sibling_separation(), 1.0);
        assert_eq!(config.subtree_separation(), 1.0);
        assert_eq!(config.node_size(), 0.25);
        assert_eq!(config.max_depth(), usize::MAX);
        assert_eq!(config.extents(), None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            sibling_separation = 2.5
            max_depth = 3
            "#,
        )
        .expect("config should parse");

        let layout = config.layout();
        assert_eq!(layout.sibling_separation(), 2.5);
        assert_eq!(layout.max_depth(), 3);
        assert_eq!(layout.level_separation(), 1.25);
        assert_eq!(layout.node_size(), 0.25);
    }

    #[test]
    fn extents_table_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout.extents]
            min_x = -10.0
            min_y = 0.0
            max_x = 10.0
            max_y = 20.0
            "#,
        )
        .expect("config should parse");

        assert_eq!(
            config.layout().extents(),
            Some(Bounds::new(-10.0, 0.0, 10.0, 20.0))
        );
    }

    #[test]
    fn empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").expect("config should parse");
        assert_eq!(*config.layout(), LayoutConfig::default());
    }

    #[test]
    fn validate_rejects_negative_and_non_finite() {
        let negative = LayoutConfig::default().with_sibling_separation(-1.0);
        let err = negative.validate().unwrap_err();
        assert!(err.to_string().contains("sibling_separation"));

        let infinite = LayoutConfig::default().with_level_separation(f32::INFINITY);
        assert!(matches!(infinite.validate(), Err(LayoutError::Config(_))));

        let nan = LayoutConfig::default().with_node_size(f32::NAN);
        assert!(matches!(nan.validate(), Err(LayoutError::Config(_))));
    }

    #[test]
    fn validate_rejects_inverted_extents() {
        let config = LayoutConfig::default().with_extents(Bounds::new(5.0, 0.0, -5.0, 1.0));
        assert!(matches!(config.validate(), Err(LayoutError::Config(_))));
    }

    #[test]
    fn zero_separations_are_valid() {
        let config = LayoutConfig::default()
            .with_sibling_separation(0.0)
            .with_subtree_separation(0.0)
            .with_node_size(0.0);
        assert!(config.validate().is_ok());
    }
}
