//! Configuration types for diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rasterized and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and style settings.
//! - [`RenderConfig`] - Controls bitmap sizing: feet-to-pixel scale, margins, font sizes.
//! - [`StyleConfig`] - Controls colors for the background, the surface, and the image.
//!
//! # Example
//!
//! ```
//! # use throwplan::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().surface_color().is_ok());
//! ```

use plotters::style::RGBColor;
use serde::Deserialize;

use throwplan_core::InvalidInput;

/// Top-level application configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style
    /// configurations.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Bitmap sizing configuration.
///
/// The bitmap is sized from the diagram's view bounds at `scale` pixels per
/// foot, which keeps the plotting area at a 1:1 unit aspect regardless of
/// surface proportions. The default scale yields print-class output for
/// room-sized surfaces.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Pixels per foot of diagram space.
    #[serde(default = "default_scale")]
    scale: u32,

    /// Pixel margin around the plotting area.
    #[serde(default = "default_margin")]
    margin: u32,

    /// Title font size in pixels.
    #[serde(default = "default_title_size")]
    title_size: u32,

    /// Dimension-label font size in pixels.
    #[serde(default = "default_label_size")]
    label_size: u32,
}

fn default_scale() -> u32 {
    72
}

fn default_margin() -> u32 {
    30
}

fn default_title_size() -> u32 {
    42
}

fn default_label_size() -> u32 {
    24
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            margin: default_margin(),
            title_size: default_title_size(),
            label_size: default_label_size(),
        }
    }
}

impl RenderConfig {
    /// Returns the feet-to-pixel scale.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns the pixel margin around the plotting area.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Returns the title font size in pixels.
    pub fn title_size(&self) -> u32 {
        self.title_size
    }

    /// Returns the dimension-label font size in pixels.
    pub fn label_size(&self) -> u32 {
        self.label_size
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are `#rrggbb` strings. Fields that are not set fall back to the
/// defaults: white background, black surface outline, blue image outline.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the whole bitmap.
    #[serde(default)]
    background_color: Option<String>,

    /// Outline and label color for the surface rectangle.
    #[serde(default)]
    surface_color: Option<String>,

    /// Outline and label color for the projected-image rectangle.
    #[serde(default)]
    image_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background color (default white).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::InvalidColor`] if the configured string is
    /// not a `#rrggbb` value.
    pub fn background_color(&self) -> Result<RGBColor, InvalidInput> {
        parse_color(
            "style.background_color",
            self.background_color.as_deref(),
            RGBColor(255, 255, 255),
        )
    }

    /// Returns the parsed surface color (default black).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::InvalidColor`] if the configured string is
    /// not a `#rrggbb` value.
    pub fn surface_color(&self) -> Result<RGBColor, InvalidInput> {
        parse_color(
            "style.surface_color",
            self.surface_color.as_deref(),
            RGBColor(0, 0, 0),
        )
    }

    /// Returns the parsed image color (default blue).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::InvalidColor`] if the configured string is
    /// not a `#rrggbb` value.
    pub fn image_color(&self) -> Result<RGBColor, InvalidInput> {
        parse_color(
            "style.image_color",
            self.image_color.as_deref(),
            RGBColor(0, 0, 255),
        )
    }
}

fn parse_color(
    field: &'static str,
    configured: Option<&str>,
    default: RGBColor,
) -> Result<RGBColor, InvalidInput> {
    let Some(value) = configured else {
        return Ok(default);
    };

    let invalid = || InvalidInput::InvalidColor {
        field,
        input: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let style = StyleConfig::default();
        assert_eq!(style.background_color().unwrap(), RGBColor(255, 255, 255));
        assert_eq!(style.surface_color().unwrap(), RGBColor(0, 0, 0));
        assert_eq!(style.image_color().unwrap(), RGBColor(0, 0, 255));
    }

    #[test]
    fn test_configured_color_parses() {
        let style = StyleConfig {
            surface_color: Some("#22313f".to_string()),
            ..StyleConfig::default()
        };
        assert_eq!(style.surface_color().unwrap(), RGBColor(0x22, 0x31, 0x3f));
    }

    #[test]
    fn test_invalid_color_names_the_field() {
        let style = StyleConfig {
            image_color: Some("navy".to_string()),
            ..StyleConfig::default()
        };
        let err = style.image_color().unwrap_err();
        assert!(err.to_string().contains("style.image_color"));

        let style = StyleConfig {
            image_color: Some("#12345".to_string()),
            ..StyleConfig::default()
        };
        assert!(style.image_color().is_err());
    }

    #[test]
    fn test_render_defaults() {
        let render = RenderConfig::default();
        assert_eq!(render.scale(), 72);
        assert!(render.margin() > 0);
    }
}
