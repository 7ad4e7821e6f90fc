//! Subprocess execution: captured runs with a wait spinner, passthrough
//! download.
//!
//! Captured runs drain stdout and stderr in two independent reader tasks
//! while a spinner ticks; the child's exit is the single termination
//! signal. There is no timeout: yt-dlp owns its own network pacing and the
//! user can interrupt the process.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use super::YT_DLP_BIN;

/// Collected output of one captured yt-dlp run.
#[derive(Debug)]
pub struct CapturedRun {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CapturedRun {
    /// The listing text contract: stdout, or stderr when stdout is empty.
    pub fn text(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

fn wait_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("spinner template is valid"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Runs yt-dlp with piped output, draining both streams concurrently while
/// a spinner shows `message`. Blocks until the process exits.
pub async fn run_capture(args: &[String], message: &str) -> Result<CapturedRun> {
    let mut child = Command::new(YT_DLP_BIN)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start {YT_DLP_BIN}"))?;

    let mut stdout_pipe = child.stdout.take().context("stdout pipe missing")?;
    let mut stderr_pipe = child.stderr.take().context("stderr pipe missing")?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        let _ = stdout_pipe.read_to_end(&mut buf).await;
        buf
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        let _ = stderr_pipe.read_to_end(&mut buf).await;
        buf
    });

    let spinner = wait_spinner(message);
    let status = child.wait().await.context("failed to wait for yt-dlp")?;
    let stdout = stdout_task.await.unwrap_or_default();
    let stderr = stderr_task.await.unwrap_or_default();
    spinner.finish_and_clear();

    Ok(CapturedRun {
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        success: status.success(),
    })
}

/// Runs the download with inherited stdio so yt-dlp renders its own
/// progress meter. Returns whether the process exited successfully.
pub async fn run_download(args: &[String]) -> Result<bool> {
    let status = Command::new(YT_DLP_BIN)
        .args(args)
        .status()
        .await
        .with_context(|| format!("failed to start {YT_DLP_BIN}"))?;
    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prefers_stdout() {
        let run = CapturedRun {
            stdout: "listing".to_string(),
            stderr: "noise".to_string(),
            success: true,
        };
        assert_eq!(run.text(), "listing");
    }

    #[test]
    fn text_falls_back_to_stderr() {
        let run = CapturedRun {
            stdout: String::new(),
            stderr: "only stderr spoke".to_string(),
            success: false,
        };
        assert_eq!(run.text(), "only stderr spoke");
    }
}
