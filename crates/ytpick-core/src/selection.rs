//! Two-step stream selection: validated prompt loop and format expression.

use anyhow::Result;

use crate::catalog::{Catalog, StreamCatalog};
use crate::report::INFO_FILE;

/// Interactive seam for the selection loop. The CLI backs this with
/// stdin/stdout; tests script it.
pub trait Prompt {
    /// Displays `message` and blocks until one line of input is available;
    /// returns it trimmed.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Shows a status line to the user.
    fn say(&mut self, message: &str);
}

/// Chosen stream identifiers. At least one side is always present, and
/// each present identifier was a catalog key at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub video: Option<String>,
    pub audio: Option<String>,
}

impl Selection {
    /// Composes the format expression handed to the downloader:
    /// the single id, or `video+audio` when both are present.
    pub fn format_expression(&self) -> String {
        match (&self.video, &self.audio) {
            (Some(video), Some(audio)) => format!("{video}+{audio}"),
            (Some(video), None) => video.clone(),
            (None, Some(audio)) => audio.clone(),
            (None, None) => unreachable!("selection always holds at least one id"),
        }
    }
}

/// Runs the two-prompt selection sequence against the catalogs.
///
/// A prompt is skipped when its catalog is empty; a blank answer is
/// accepted only while the other catalog can still supply a stream.
/// Invalid answers re-prompt indefinitely. If both answers end up blank,
/// the whole sequence restarts.
pub fn resolve_selection(catalog: &StreamCatalog, prompt: &mut dyn Prompt) -> Result<Selection> {
    if catalog.is_empty() {
        anyhow::bail!("no streams to select from");
    }
    loop {
        let video = if catalog.video.is_empty() {
            None
        } else {
            let allow_blank = !catalog.audio.is_empty();
            prompt_choice(prompt, "Video ID", &catalog.video, allow_blank)?
        };

        let audio = if catalog.audio.is_empty() {
            None
        } else {
            let allow_blank = !catalog.video.is_empty();
            prompt_choice(prompt, "Audio ID", &catalog.audio, allow_blank)?
        };

        if video.is_none() && audio.is_none() {
            prompt.say("Select at least one stream ID.");
            continue;
        }

        return Ok(Selection { video, audio });
    }
}

/// Asks until the answer is a catalog key, or blank where permitted.
fn prompt_choice(
    prompt: &mut dyn Prompt,
    label: &str,
    choices: &Catalog,
    allow_blank: bool,
) -> Result<Option<String>> {
    let message = if allow_blank {
        format!("{label} (Enter to skip): ")
    } else {
        format!("{label}: ")
    };
    loop {
        let answer = prompt.ask(&message)?;
        if answer.is_empty() {
            if allow_blank {
                return Ok(None);
            }
        } else if choices.contains(&answer) {
            return Ok(Some(answer));
        }
        prompt.say(&format!("Invalid ID. Enter an ID listed in \"{INFO_FILE}\"."));
    }
}
