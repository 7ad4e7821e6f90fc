//! Selection-info and raw-listing side files with idempotent writes.
//!
//! The selection-info layout (headers, blank lines, fixed "none found"
//! messages) is a text contract consumed by the user while picking IDs;
//! it is rendered byte-for-byte the same for the same catalogs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::StreamCatalog;

/// Reference file the user opens to pick stream IDs.
pub const INFO_FILE: &str = "info.txt";

/// Verbatim copy of the last listing output.
pub const RAW_FILE: &str = "raw.txt";

const NO_VIDEO_MSG: &str = "Nenhum vídeo encontrado";
const NO_AUDIO_MSG: &str = "Nenhum áudio encontrado";

/// Renders the selection-info document: optional title line, the video
/// section, two blank lines, the audio section. Empty catalogs render a
/// fixed "none found" message instead of rows.
pub fn render_selection_info(catalog: &StreamCatalog, title: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(title);
        out.push_str("\n\n");
    }

    out.push_str("VÍDEOS:\n\n");
    if catalog.video.is_empty() {
        out.push_str(NO_VIDEO_MSG);
        out.push('\n');
    } else {
        for row in catalog.video.rows() {
            out.push_str(row);
            out.push('\n');
        }
    }

    out.push_str("\n\n");

    out.push_str("ÁUDIOS:\n\n");
    if catalog.audio.is_empty() {
        out.push_str(NO_AUDIO_MSG);
        out.push('\n');
    } else {
        for row in catalog.audio.rows() {
            out.push_str(row);
            out.push('\n');
        }
    }

    out
}

/// Writes `content` to `path` only when it differs from what the file
/// already holds. Returns whether the file was written.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == content {
            return Ok(false);
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}
