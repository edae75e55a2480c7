//! File-backed media picker.

use std::path::PathBuf;

use memeforge_common::{MemeforgeError, MemeforgeResult};
use memeforge_platform_core::{ImageSource, MediaPicker, PickOutcome};

/// A picker whose "library" is a single image path on disk.
///
/// An unset path resolves as `Cancelled`, matching a user backing out of
/// the picker flow. Camera capture is not supported on the host; the
/// probe can still report device presence so availability gating stays
/// real.
#[derive(Debug, Default)]
pub struct FilePicker {
    library_path: Option<PathBuf>,
}

impl FilePicker {
    pub fn new(library_path: Option<PathBuf>) -> Self {
        Self { library_path }
    }
}

impl MediaPicker for FilePicker {
    fn pick(&mut self, source: ImageSource) -> MemeforgeResult<PickOutcome> {
        match source {
            ImageSource::Library => {
                let Some(ref path) = self.library_path else {
                    tracing::info!("Library pick dismissed (no path configured)");
                    return Ok(PickOutcome::Cancelled);
                };
                let image = image::open(path)
                    .map_err(|e| {
                        MemeforgeError::picker(format!("Failed to load image {path:?}: {e}"))
                    })?
                    .to_rgba8();
                tracing::info!(path = %path.display(), "Picked image from library");
                Ok(PickOutcome::Selected(image))
            }
            ImageSource::Camera => Err(MemeforgeError::unsupported(
                "Camera capture is not available in the host picker",
            )),
        }
    }
}
