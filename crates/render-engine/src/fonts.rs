//! Font discovery.
//!
//! Resolution order: explicit path from the style, then the
//! `MEMEFORGE_FONT` environment variable, then a scan of the standard
//! font directories. Candidates are scored by filename so condensed/bold
//! display faces win over italics and monospace faces.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use memeforge_common::{MemeforgeError, MemeforgeResult};

/// Maximum directory depth when scanning font trees.
const MAX_SCAN_DEPTH: usize = 4;

/// Resolve and parse a caption font.
pub fn load_font(explicit: Option<&Path>) -> MemeforgeResult<FontVec> {
    if let Some(path) = explicit {
        return read_font(path);
    }

    if let Ok(path) = std::env::var("MEMEFORGE_FONT") {
        return read_font(Path::new(&path));
    }

    let mut candidates: Vec<(PathBuf, u32)> = Vec::new();
    for dir in font_dirs() {
        collect_fonts(&dir, 0, &mut candidates);
    }

    if candidates.is_empty() {
        return Err(MemeforgeError::render(
            "No usable font found; set MEMEFORGE_FONT or configure style.font",
        ));
    }

    // Sort by priority descending (higher = better caption face)
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    for (path, priority) in &candidates {
        match read_font(path) {
            Ok(font) => {
                tracing::debug!(font = %path.display(), priority, "Selected caption font");
                return Ok(font);
            }
            Err(e) => {
                tracing::debug!(font = %path.display(), error = %e, "Skipping unparseable font");
            }
        }
    }

    Err(MemeforgeError::render(
        "No discovered font file could be parsed",
    ))
}

fn read_font(path: &Path) -> MemeforgeResult<FontVec> {
    let data = std::fs::read(path)
        .map_err(|e| MemeforgeError::render(format!("Failed to read font {path:?}: {e}")))?;
    FontVec::try_from_vec(data)
        .map_err(|e| MemeforgeError::render(format!("Invalid font {path:?}: {e}")))
}

/// Standard font directories, user dirs first.
fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(home) = std::env::var("HOME") {
        dirs.push(PathBuf::from(&home).join(".local").join("share").join("fonts"));
        dirs.push(PathBuf::from(&home).join(".fonts"));
    }
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs
}

fn collect_fonts(dir: &Path, depth: usize, out: &mut Vec<(PathBuf, u32)>) {
    if depth > MAX_SCAN_DEPTH {
        return;
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_fonts(&path, depth + 1, out);
            continue;
        }
        let is_font = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
            .unwrap_or(false);
        if !is_font {
            continue;
        }
        let priority = font_priority(&path);
        if priority > 0 {
            out.push((path, priority));
        }
    }
}

/// Score a font file as a caption-face candidate (higher = better).
/// Returns 0 for faces that would read badly as meme captions.
fn font_priority(path: &Path) -> u32 {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let rejected = ["italic", "oblique", "thin", "light", "mono"];
    if rejected.iter().any(|kw| name.contains(kw)) {
        return 0;
    }

    let mut score = 10;
    if name.contains("condensed") {
        score += 40;
    }
    if name.contains("black") {
        score += 30;
    }
    if name.contains("bold") {
        score += 30;
    }
    // Widely shipped families render predictably
    let families = ["dejavu", "liberation", "noto", "freesans", "impact"];
    if families.iter().any(|kw| name.contains(kw)) {
        score += 10;
    }
    score
}
