//! V4L2 camera availability probe.
//!
//! Enumerates `/dev/video0`–`/dev/video15` and filters each candidate by
//! its sysfs device name so tuners, capture cards, and encoder nodes do
//! not count as cameras. Availability can change between calls, which is
//! exactly why the editor re-queries on every appearance.

use memeforge_platform_core::CaptureProbe;

/// Probe backed by the kernel's video4linux sysfs tree.
#[derive(Debug, Default)]
pub struct V4l2CaptureProbe {
    /// Override the sysfs root (tests point this at a temp dir).
    sysfs_root: Option<std::path::PathBuf>,
}

impl V4l2CaptureProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_sysfs_root(root: std::path::PathBuf) -> Self {
        Self {
            sysfs_root: Some(root),
        }
    }

    fn device_exists(&self, idx: u32) -> bool {
        match self.sysfs_root {
            // Test roots stand in for /dev as well
            Some(ref root) => root.join(format!("video{idx}")).exists(),
            None => std::path::Path::new(&format!("/dev/video{idx}")).exists(),
        }
    }

    fn device_name(&self, idx: u32) -> String {
        let name_path = match self.sysfs_root {
            Some(ref root) => root.join(format!("video{idx}")).join("name"),
            None => std::path::PathBuf::from(format!("/sys/class/video4linux/video{idx}/name")),
        };
        std::fs::read_to_string(name_path)
            .unwrap_or_default()
            .to_lowercase()
    }
}

impl CaptureProbe for V4l2CaptureProbe {
    fn camera_available(&self) -> bool {
        for idx in 0..16u32 {
            if !self.device_exists(idx) {
                continue;
            }
            let name = self.device_name(idx);
            if is_camera_name(&name) {
                tracing::debug!(device = idx, name = %name.trim(), "Camera device found");
                return true;
            }
            tracing::debug!(device = idx, name = %name.trim(), "Skipping non-camera V4L2 device");
        }
        false
    }
}

/// Whether a V4L2 device name looks like a camera rather than a tuner,
/// capture card, or codec node. An empty name (no sysfs info) is treated
/// as a camera: a bare `/dev/videoN` node is more likely a webcam than
/// broadcast hardware.
fn is_camera_name(name: &str) -> bool {
    let non_camera_keywords = [
        "tuner",
        "tv",
        "dvb",
        "hdmi",
        "encoder",
        "decoder",
        "hauppauge",
        "blackmagic",
        "magewell",
    ];
    !non_camera_keywords.iter().any(|kw| name.contains(kw))
}
