//! Caption compositor.
//!
//! Implements the platform's "flatten current visual state to a bitmap"
//! primitive: background fill, aspect-fit source image, then both caption
//! lines drawn stroke-first so the fill sits on a solid outline. Layout
//! math is pure and kept separate from pixel work so it can be tested
//! without a font.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{imageops, ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use memeforge_common::{MemeforgeError, MemeforgeResult};
use memeforge_composition_model::CaptionStyle;
use memeforge_platform_core::{ScreenBounds, ScreenFrame, ScreenRenderer};

use crate::fonts;

/// Where each caption line starts, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionLayout {
    /// Top-left origin of the top caption.
    pub top: (i32, i32),
    /// Top-left origin of the bottom caption.
    pub bottom: (i32, i32),
}

/// Compute caption origins for the given bounds.
///
/// Both lines are horizontally centered; the top line sits `margin_ratio`
/// of the height below the top edge, the bottom line the same distance
/// above the bottom edge. On degenerate bounds the bottom line is clamped
/// so it never rises above the top line.
pub fn caption_layout(
    bounds: ScreenBounds,
    margin_ratio: f64,
    line_height: f32,
    top_width: f32,
    bottom_width: f32,
) -> CaptionLayout {
    let margin = (bounds.height as f64 * margin_ratio).round() as i32;
    let top_y = margin;
    let bottom_y = (bounds.height as i32 - margin - line_height.ceil() as i32).max(top_y);

    CaptionLayout {
        top: (centered_x(bounds.width, top_width), top_y),
        bottom: (centered_x(bounds.width, bottom_width), bottom_y),
    }
}

fn centered_x(canvas_width: u32, text_width: f32) -> i32 {
    (((canvas_width as f32 - text_width) / 2.0).round() as i32).max(0)
}

/// Aspect-fit placement of a source image inside the canvas.
/// Returns `(width, height, x, y)`.
pub fn fit_rect(src_width: u32, src_height: u32, bounds: ScreenBounds) -> (u32, u32, i64, i64) {
    if src_width == 0 || src_height == 0 {
        return (0, 0, 0, 0);
    }
    let scale = f64::min(
        bounds.width as f64 / src_width as f64,
        bounds.height as f64 / src_height as f64,
    );
    let width = ((src_width as f64 * scale).round() as u32).max(1);
    let height = ((src_height as f64 * scale).round() as u32).max(1);
    let x = (bounds.width as i64 - width as i64) / 2;
    let y = (bounds.height as i64 - height as i64) / 2;
    (width, height, x, y)
}

/// Parse a `#rrggbb` (or `#rrggbbaa`) hex color.
pub fn hex_color(value: &str) -> MemeforgeResult<Rgba<u8>> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    let invalid = || MemeforgeError::render(format!("Invalid hex color: {value}"));
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    match hex.len() {
        6 => Ok(Rgba([byte(0..2)?, byte(2..4)?, byte(4..6)?, 255])),
        8 => Ok(Rgba([byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?])),
        _ => Err(invalid()),
    }
}

/// The host `ScreenRenderer`: styles and a resolved caption font.
pub struct Compositor {
    style: CaptionStyle,
    font: FontVec,
}

impl Compositor {
    /// Build a compositor, resolving the font from the style (explicit
    /// path, `MEMEFORGE_FONT`, then system font directories).
    pub fn from_style(style: CaptionStyle) -> MemeforgeResult<Self> {
        let font = fonts::load_font(style.font.as_deref())?;
        Ok(Self { style, font })
    }

    /// Build a compositor around an already-parsed font.
    pub fn with_font(style: CaptionStyle, font: FontVec) -> Self {
        Self { style, font }
    }

    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    fn scale(&self) -> PxScale {
        PxScale::from(self.style.font_px)
    }

    /// Advance width of a single text line at the caption scale.
    fn line_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale());
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let glyph = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, glyph);
            }
            width += scaled.h_advance(glyph);
            prev = Some(glyph);
        }
        width
    }

    fn line_height(&self) -> f32 {
        self.font.as_scaled(self.scale()).height()
    }

    /// Stroke-then-fill text: the stroke color stamped at every offset
    /// within `stroke_width` of the origin, then the fill on top.
    fn draw_caption(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        origin: (i32, i32),
        fill: Rgba<u8>,
        stroke: Rgba<u8>,
    ) {
        let (x, y) = origin;
        let radius = self.style.stroke_width as i32;
        let scale = self.scale();

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                draw_text_mut(canvas, stroke, x + dx, y + dy, scale, &self.font, text);
            }
        }
        draw_text_mut(canvas, fill, x, y, scale, &self.font, text);
    }
}

impl ScreenRenderer for Compositor {
    fn flatten(&mut self, frame: &ScreenFrame<'_>) -> MemeforgeResult<RgbaImage> {
        let bounds = frame.bounds;
        if bounds.area() == 0 {
            return Err(MemeforgeError::render(format!(
                "Degenerate screen bounds {}x{}",
                bounds.width, bounds.height
            )));
        }

        let background = hex_color(&self.style.background)?;
        let fill = hex_color(&self.style.fill)?;
        let stroke = hex_color(&self.style.stroke)?;

        let mut canvas: RgbaImage =
            ImageBuffer::from_pixel(bounds.width, bounds.height, background);

        if let Some(source) = frame.image {
            let (src_width, src_height) = source.dimensions();
            let (width, height, x, y) = fit_rect(src_width, src_height, bounds);
            if width > 0 && height > 0 {
                let scaled = imageops::resize(source, width, height, imageops::FilterType::Triangle);
                imageops::overlay(&mut canvas, &scaled, x, y);
            }
        }

        let layout = caption_layout(
            bounds,
            self.style.margin_ratio,
            self.line_height(),
            self.line_width(frame.top_text),
            self.line_width(frame.bottom_text),
        );
        self.draw_caption(&mut canvas, frame.top_text, layout.top, fill, stroke);
        self.draw_caption(&mut canvas, frame.bottom_text, layout.bottom, fill, stroke);

        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            chrome_visible = frame.chrome_visible,
            "Flattened screen frame"
        );
        Ok(canvas)
    }
}
