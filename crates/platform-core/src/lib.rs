//! MemeForge platform core contracts.
//!
//! This crate contains the collaborator interfaces the editor session is
//! wired against, without coupling to a concrete host backend. Every
//! platform service the original screen talked to — media picker, camera
//! capability query, share sheet, view flattening — is a trait here, so
//! host implementations and test stubs plug in the same way.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use memeforge_common::MemeforgeResult;

/// The screen region the composite is rendered at, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count; handy for size sanity checks.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Which flow the media picker opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Pick an existing image from the library.
    Library,
    /// Capture a new image from a camera device.
    Camera,
}

/// How a picker flow resolved.
#[derive(Debug, Clone)]
pub enum PickOutcome {
    /// The user selected (or captured) a bitmap.
    Selected(RgbaImage),
    /// The user backed out; editor state must not change.
    Cancelled,
}

/// How a share flow resolved.
///
/// Cancellation and failure are ordinary outcomes, not errors: the share
/// facility itself ran fine, the share just did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share action completed.
    Completed,
    /// The user dismissed the share flow.
    Cancelled,
    /// The share ran and reported a failure.
    Failed { message: String },
}

/// Modal media-selection flow (photo library or camera capture).
pub trait MediaPicker {
    /// Present the flow for the given source and block until it resolves.
    fn pick(&mut self, source: ImageSource) -> MemeforgeResult<PickOutcome>;
}

/// Capability query for capture devices.
///
/// Availability may change between calls (device plugged/unplugged), so
/// the editor re-queries every time it becomes visible.
pub trait CaptureProbe {
    fn camera_available(&self) -> bool;
}

/// Modal share flow for a single rendered bitmap.
pub trait ShareFacility {
    fn share(&mut self, image: &RgbaImage) -> MemeforgeResult<ShareOutcome>;
}

/// Everything the renderer needs to flatten the current visual state.
#[derive(Debug, Clone)]
pub struct ScreenFrame<'a> {
    /// Output dimensions.
    pub bounds: ScreenBounds,

    /// The chosen source image, if any.
    pub image: Option<&'a RgbaImage>,

    /// Current top caption text.
    pub top_text: &'a str,

    /// Current bottom caption text.
    pub bottom_text: &'a str,

    /// Whether surrounding chrome (toolbar) is visible. The editor hides
    /// chrome for the duration of a flatten so it never lands in the
    /// output.
    pub chrome_visible: bool,
}

/// Flatten the current visual state to a bitmap of the frame's bounds.
///
/// This is the platform primitive the original screen reached for when
/// exporting; implementations must return a bitmap whose dimensions equal
/// `frame.bounds` exactly.
pub trait ScreenRenderer {
    fn flatten(&mut self, frame: &ScreenFrame<'_>) -> MemeforgeResult<RgbaImage>;
}
