//! Caption styling.
//!
//! Colors are hex strings (for example `#00ff00`) so the style can live in
//! the JSON config unchanged. Alignment is fixed: captions are always
//! centered.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Styling applied to both caption lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionStyle {
    /// Glyph fill color as hex string.
    pub fill: String,

    /// Glyph outline color as hex string.
    pub stroke: String,

    /// Outline thickness in pixels.
    pub stroke_width: u32,

    /// Font size in pixels.
    pub font_px: f32,

    /// Vertical inset of each caption line as a fraction of screen height.
    pub margin_ratio: f64,

    /// Canvas background color behind the image, as hex string.
    pub background: String,

    /// Explicit font file. When unset the render engine discovers a
    /// bold face from the standard font directories.
    pub font: Option<PathBuf>,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            fill: "#00ff00".to_string(),
            stroke: "#0000ff".to_string(),
            stroke_width: 3,
            font_px: 40.0,
            margin_ratio: 0.05,
            background: "#1a1a1a".to_string(),
            font: None,
        }
    }
}
