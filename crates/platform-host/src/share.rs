//! File-backed share facility.

use std::path::PathBuf;

use image::RgbaImage;
use memeforge_common::MemeforgeResult;
use memeforge_platform_core::{ShareFacility, ShareOutcome};

/// "Shares" a composite by encoding it as PNG at a target path.
///
/// I/O and encode failures map to `ShareOutcome::Failed`: the flow ran
/// and reported an unsuccessful share, which is an outcome, not an error
/// in the facility itself.
#[derive(Debug)]
pub struct FileShareFacility {
    target: PathBuf,
}

impl FileShareFacility {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &std::path::Path {
        &self.target
    }
}

impl ShareFacility for FileShareFacility {
    fn share(&mut self, image: &RgbaImage) -> MemeforgeResult<ShareOutcome> {
        if let Some(parent) = self.target.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return Ok(ShareOutcome::Failed {
                    message: format!("Failed to create {parent:?}: {e}"),
                });
            }
        }
        match image.save(&self.target) {
            Ok(()) => {
                tracing::info!(target = %self.target.display(), "Composite shared to disk");
                Ok(ShareOutcome::Completed)
            }
            Err(e) => Ok(ShareOutcome::Failed {
                message: format!("Failed to write {:?}: {e}", self.target),
            }),
        }
    }
}
