//! Check host capabilities.

use memeforge_common::config::AppConfig;
use memeforge_platform_core::CaptureProbe;
use memeforge_platform_host::V4l2CaptureProbe;

pub fn run() -> anyhow::Result<()> {
    println!("MemeForge System Check");
    println!("{}", "=".repeat(50));

    // Camera capability (gates the capture control, never an error)
    let probe = V4l2CaptureProbe::new();
    if probe.camera_available() {
        println!("[OK] Camera capture device present");
    } else {
        println!("[WARN] No camera capture device; capture control disabled");
    }

    // Caption font discovery
    match memeforge_render_engine::fonts::load_font(None) {
        Ok(_) => println!("[OK] Caption font resolved"),
        Err(e) => println!("[WARN] Caption font: {e}"),
    }

    // Effective configuration
    let config = AppConfig::load();
    println!("[OK] Exports directory: {}", config.exports_dir.display());
    println!(
        "[OK] Screen bounds: {}x{}",
        config.editor.screen_width, config.editor.screen_height
    );

    Ok(())
}
