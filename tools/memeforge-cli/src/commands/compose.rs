//! Compose a captioned image through a headless editor session.

use std::path::PathBuf;

use memeforge_common::config::AppConfig;
use memeforge_composition_model::CaptionStyle;
use memeforge_editor_core::{CaptionField, EditorConfig, EditorSession};
use memeforge_platform_core::{ImageSource, ScreenBounds};
use memeforge_platform_host::{FilePicker, FileShareFacility, V4l2CaptureProbe};
use memeforge_render_engine::Compositor;

pub fn run(
    input: PathBuf,
    top: String,
    bottom: String,
    output: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    font: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let output = output.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("composite");
        config.exports_dir.join(format!("{stem}-meme.png"))
    });

    let mut editor_config = EditorConfig::from_defaults(&config.editor);
    editor_config.bounds = ScreenBounds::new(
        width.unwrap_or(editor_config.bounds.width),
        height.unwrap_or(editor_config.bounds.height),
    );

    let style = CaptionStyle {
        font,
        ..CaptionStyle::default()
    };
    let compositor = Compositor::from_style(style)?;

    let mut session = EditorSession::new(
        editor_config,
        Box::new(FilePicker::new(Some(input.clone()))),
        Box::new(V4l2CaptureProbe::new()),
        Box::new(FileShareFacility::new(output.clone())),
        Box::new(compositor),
    );

    session.became_visible();
    if !session.pick_image(ImageSource::Library)? {
        anyhow::bail!("No image selected from {input:?}");
    }

    // Drive the same focus/edit flow the screen would
    session.begin_editing(CaptionField::Top);
    session.set_caption(CaptionField::Top, top);
    session.submit(CaptionField::Top);

    session.begin_editing(CaptionField::Bottom);
    session.set_caption(CaptionField::Bottom, bottom);
    session.submit(CaptionField::Bottom);

    match session.share()? {
        Some(composition) => {
            // Constructed and dropped: the record is the hook for a
            // future library screen, nothing persists it today.
            tracing::info!(
                top = %composition.top_text,
                bottom = %composition.bottom_text,
                dimensions = ?composition.rendered_image.dimensions(),
                "Composition built"
            );
            println!("Shared composite to {}", output.display());
            Ok(())
        }
        None => anyhow::bail!("Share did not complete"),
    }
}
