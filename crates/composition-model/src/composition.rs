//! The composition entity.
//!
//! A `Composition` pairs the original image, both caption strings, and the
//! flattened output. It has no identity and no persistence: the editor
//! constructs one at share-confirmation time and hands it to the caller,
//! which currently discards it (kept as the hook for a future library
//! screen).

use image::RgbaImage;

/// A finished caption composition.
///
/// Only constructible once a source image exists; `rendered_image` is
/// always derived fresh from the screen state at the moment of export and
/// is never mutated afterwards.
#[derive(Clone)]
pub struct Composition {
    /// Caption rendered above the image.
    pub top_text: String,

    /// Caption rendered below the image.
    pub bottom_text: String,

    /// The originally selected/captured bitmap.
    pub source_image: RgbaImage,

    /// The flattened output with both captions burned in.
    pub rendered_image: RgbaImage,

    /// Construction timestamp (RFC 3339).
    pub created_at: String,
}

impl Composition {
    /// Build a composition from the current editor state.
    pub fn new(
        top_text: impl Into<String>,
        bottom_text: impl Into<String>,
        source_image: RgbaImage,
        rendered_image: RgbaImage,
    ) -> Self {
        Self {
            top_text: top_text.into(),
            bottom_text: bottom_text.into(),
            source_image,
            rendered_image,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl std::fmt::Debug for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composition")
            .field("top_text", &self.top_text)
            .field("bottom_text", &self.bottom_text)
            .field("source_image", &self.source_image.dimensions())
            .field("rendered_image", &self.rendered_image.dimensions())
            .field("created_at", &self.created_at)
            .finish()
    }
}
