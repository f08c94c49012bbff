//! Configuration types for Arbor tree rendering.
//!
//! This module provides configuration structures that control how trees
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources, and every field falls back to a
//! default when it is missing.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing parameters for the [`TidyLayout`] engine.
//! - [`StyleConfig`] - Colors, stroke widths, padding and text size used by the renderer.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.layout().node_radius(), 20.0);
//! ```

use serde::Deserialize;

use arbor_core::color::Color;

use crate::{error::ArborError, layout::TidyLayout};

/// Top-level application configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Spacing of the tidy layout.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that the layout spacing is usable and that every configured
    /// color parses.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] for invalid spacing and
    /// [`ArborError::Style`] for invalid colors or sizes.
    pub fn validate(&self) -> Result<(), ArborError> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Spacing of the tidy layout, in pixels.
///
/// Separations are gaps between circle surfaces, so the distance between
/// the centres of two siblings is at least
/// `sibling_separation + 2 * node_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    sibling_separation: f32,
    level_separation: f32,
    node_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sibling_separation: 20.0,
            level_separation: 20.0,
            node_radius: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `sibling_separation` - Minimum horizontal gap between nodes on one level.
    /// * `level_separation` - Vertical gap between consecutive levels.
    /// * `node_radius` - Radius of the drawn node circles.
    pub fn new(sibling_separation: f32, level_separation: f32, node_radius: f32) -> Self {
        Self {
            sibling_separation,
            level_separation,
            node_radius,
        }
    }

    pub fn sibling_separation(&self) -> f32 {
        self.sibling_separation
    }

    pub fn level_separation(&self) -> f32 {
        self.level_separation
    }

    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    /// Returns a [`TidyLayout`] engine configured with this spacing.
    pub fn engine(&self) -> TidyLayout {
        TidyLayout::new()
            .with_sibling_separation(self.sibling_separation)
            .with_level_separation(self.level_separation)
            .with_node_radius(self.node_radius)
    }

    fn validate(&self) -> Result<(), ArborError> {
        for (name, value) in [
            ("sibling_separation", self.sibling_separation),
            ("level_separation", self.level_separation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ArborError::Config(format!(
                    "`{name}` must be a finite, non-negative number, got {value}"
                )));
            }
        }

        if !self.node_radius.is_finite() || self.node_radius <= 0.0 {
            return Err(ArborError::Config(format!(
                "`node_radius` must be a finite, positive number, got {}",
                self.node_radius
            )));
        }

        Ok(())
    }
}

/// Visual styling configuration for rendered trees.
///
/// Color fields hold CSS color strings and are parsed on access.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    horizontal_padding: f32,
    vertical_padding: f32,

    /// Fill of internal nodes, and of leaves when `leaf_color` is unset.
    node_color: String,
    leaf_color: Option<String>,
    /// Outline of node circles. No outline is drawn when unset.
    node_stroke_color: Option<String>,
    node_stroke_width: f32,

    text_size: f32,
    text_color: String,

    edge_width: f32,
    edge_color: String,
    /// Draw an arrow head where each edge meets the child.
    edge_arrow: bool,
    arrow_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            horizontal_padding: 15.0,
            vertical_padding: 20.0,
            node_color: "#868383".to_string(),
            leaf_color: None,
            node_stroke_color: None,
            node_stroke_width: 1.0,
            text_size: 16.0,
            text_color: "black".to_string(),
            edge_width: 2.0,
            edge_color: "black".to_string(),
            edge_arrow: false,
            arrow_size: 2.0,
        }
    }
}

impl StyleConfig {
    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    pub fn with_node_color(mut self, color: &str) -> Self {
        self.node_color = color.to_string();
        self
    }

    pub fn with_leaf_color(mut self, color: &str) -> Self {
        self.leaf_color = Some(color.to_string());
        self
    }

    pub fn with_node_stroke(mut self, color: &str, width: f32) -> Self {
        self.node_stroke_color = Some(color.to_string());
        self.node_stroke_width = width;
        self
    }

    pub fn with_padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    pub fn with_text(mut self, color: &str, size: f32) -> Self {
        self.text_color = color.to_string();
        self.text_size = size;
        self
    }

    pub fn with_edge_arrow(mut self, arrow_size: f32) -> Self {
        self.edge_arrow = true;
        self.arrow_size = arrow_size;
        self
    }

    /// Returns the parsed canvas background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background_color", &self.background_color)
    }

    pub fn node_color(&self) -> Result<Color, String> {
        parse_color("node_color", &self.node_color)
    }

    /// Returns the leaf fill, falling back to [`node_color`](Self::node_color).
    pub fn leaf_color(&self) -> Result<Color, String> {
        match &self.leaf_color {
            Some(color) => parse_color("leaf_color", color),
            None => self.node_color(),
        }
    }

    pub fn node_stroke_color(&self) -> Result<Option<Color>, String> {
        self.node_stroke_color
            .as_deref()
            .map(|color| parse_color("node_stroke_color", color))
            .transpose()
    }

    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text_color", &self.text_color)
    }

    pub fn edge_color(&self) -> Result<Color, String> {
        parse_color("edge_color", &self.edge_color)
    }

    pub fn horizontal_padding(&self) -> f32 {
        self.horizontal_padding
    }

    pub fn vertical_padding(&self) -> f32 {
        self.vertical_padding
    }

    pub fn node_stroke_width(&self) -> f32 {
        self.node_stroke_width
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn edge_width(&self) -> f32 {
        self.edge_width
    }

    pub fn edge_arrow(&self) -> bool {
        self.edge_arrow
    }

    pub fn arrow_size(&self) -> f32 {
        self.arrow_size
    }

    fn validate(&self) -> Result<(), ArborError> {
        self.background_color().map_err(ArborError::Style)?;
        self.node_color().map_err(ArborError::Style)?;
        self.leaf_color().map_err(ArborError::Style)?;
        self.node_stroke_color().map_err(ArborError::Style)?;
        self.text_color().map_err(ArborError::Style)?;
        self.edge_color().map_err(ArborError::Style)?;

        for (name, value) in [
            ("horizontal_padding", self.horizontal_padding),
            ("vertical_padding", self.vertical_padding),
            ("node_stroke_width", self.node_stroke_width),
            ("text_size", self.text_size),
            ("edge_width", self.edge_width),
            ("arrow_size", self.arrow_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ArborError::Style(format!(
                    "`{name}` must be a finite, non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

fn parse_color(name: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {name} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        let layout = config.layout();
        let style = config.style();

        assert_approx_eq!(f32, layout.sibling_separation(), 20.0);
        assert_approx_eq!(f32, layout.level_separation(), 20.0);
        assert_approx_eq!(f32, layout.node_radius(), 20.0);

        assert_eq!(
            style.background_color().unwrap(),
            Color::new("white").unwrap()
        );
        assert_eq!(style.leaf_color().unwrap(), style.node_color().unwrap());
        assert_eq!(style.node_stroke_color().unwrap(), None);
        assert!(!style.edge_arrow());
        assert_approx_eq!(f32, style.text_size(), 16.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_engine_uses_spacing() {
        let engine = LayoutConfig::new(10.0, 30.0, 5.0).engine();
        assert_approx_eq!(f32, engine.min_separation(), 20.0);
        assert_approx_eq!(f32, engine.level_height(), 40.0);
    }

    #[test]
    fn test_rejects_invalid_layout() {
        let negative = AppConfig::new(LayoutConfig::new(-1.0, 20.0, 20.0), StyleConfig::default());
        assert!(matches!(negative.validate(), Err(ArborError::Config(_))));

        let zero_radius =
            AppConfig::new(LayoutConfig::new(20.0, 20.0, 0.0), StyleConfig::default());
        assert!(matches!(zero_radius.validate(), Err(ArborError::Config(_))));

        let infinite = AppConfig::new(
            LayoutConfig::new(20.0, f32::INFINITY, 20.0),
            StyleConfig::default(),
        );
        assert!(matches!(infinite.validate(), Err(ArborError::Config(_))));
    }

    #[test]
    fn test_rejects_invalid_color() {
        let style = StyleConfig::default().with_leaf_color("not-a-color");
        assert!(style.leaf_color().is_err());

        let config = AppConfig::new(LayoutConfig::default(), style);
        assert!(matches!(config.validate(), Err(ArborError::Style(_))));
    }

    #[test]
    fn test_style_builders() {
        let style = StyleConfig::default()
            .with_node_stroke("navy", 3.0)
            .with_edge_arrow(4.0)
            .with_padding(5.0, 6.0);

        assert!(style.node_stroke_color().unwrap().is_some());
        assert_approx_eq!(f32, style.node_stroke_width(), 3.0);
        assert!(style.edge_arrow());
        assert_approx_eq!(f32, style.arrow_size(), 4.0);
        assert_approx_eq!(f32, style.horizontal_padding(), 5.0);
        assert_approx_eq!(f32, style.vertical_padding(), 6.0);
    }
}
