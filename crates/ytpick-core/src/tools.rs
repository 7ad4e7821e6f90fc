//! Discovery of the required external tools before the session starts.

use thiserror::Error;

use crate::ytdlp::YT_DLP_BIN;

/// Muxer yt-dlp shells out to when a video and an audio stream are merged.
pub const FFMPEG_BIN: &str = "ffmpeg";

/// One or more required external tools are missing from PATH.
#[derive(Debug, Error)]
#[error("missing external dependencies: {}", .missing.join(", "))]
pub struct MissingTools {
    pub missing: Vec<String>,
}

/// Verifies that yt-dlp, ffmpeg, and the configured JS runtime resolve on
/// PATH. The error lists every missing tool by name.
pub fn check_requirements(js_runtime: &str) -> Result<(), MissingTools> {
    let required = [YT_DLP_BIN, FFMPEG_BIN, js_runtime];
    let missing: Vec<String> = required
        .iter()
        .filter(|tool| which::which(tool).is_err())
        .map(|tool| tool.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingTools { missing })
    }
}
