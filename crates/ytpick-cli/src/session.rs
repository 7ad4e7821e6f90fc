//! Interactive session loop: link, probe, listing, selection, download.
//!
//! Tool failures and empty listings are reported as status lines and fall
//! through to the retry-or-exit prompt; only prompt I/O failures (stdin
//! closed) abort the session.

use std::fs;
use std::path::Path;

use anyhow::Result;

use ytpick_core::catalog;
use ytpick_core::config::YtpickConfig;
use ytpick_core::link;
use ytpick_core::rename;
use ytpick_core::report;
use ytpick_core::selection::{self, Prompt};
use ytpick_core::ytdlp;

pub async fn run(cfg: &YtpickConfig, initial_link: Option<String>, prompt: &mut dyn Prompt) -> Result<()> {
    let mut pending = initial_link;
    loop {
        let canonical = acquire_link(pending.take(), prompt)?;
        run_cycle(cfg, &canonical, prompt).await?;

        if !ask_yes_no(prompt, "Download another? (y/N): ")? {
            break;
        }
    }
    Ok(())
}

/// Normalizes the starting link, re-prompting until a recognized YouTube
/// URL is supplied.
fn acquire_link(initial: Option<String>, prompt: &mut dyn Prompt) -> Result<String> {
    if let Some(raw) = initial {
        match link::normalize(&raw) {
            Some(canonical) => return Ok(canonical),
            None => prompt.say("Invalid link."),
        }
    }
    loop {
        let raw = prompt.ask("Paste a YouTube link: ")?;
        match link::normalize(&raw) {
            Some(canonical) => return Ok(canonical),
            None => prompt.say("Invalid link."),
        }
    }
}

/// One probe/list/select/download cycle for a canonical link.
async fn run_cycle(cfg: &YtpickConfig, canonical: &str, prompt: &mut dyn Prompt) -> Result<()> {
    let probe = probe_metadata(cfg, canonical).await;
    if probe.is_live_now() {
        prompt.say("This video is live right now; live streams are not supported.");
        return Ok(());
    }

    let listing = match ytdlp::run_capture(
        &ytdlp::list_args(&cfg.js_runtime, canonical),
        "Listing available formats...",
    )
    .await
    {
        Ok(run) => run,
        Err(err) => {
            tracing::warn!("format listing failed: {err:#}");
            prompt.say("Something went wrong while talking to yt-dlp.");
            return Ok(());
        }
    };

    let raw = listing.text();
    if raw.is_empty() {
        tracing::warn!("format listing produced no output (success: {})", listing.success);
        prompt.say("Something went wrong while talking to yt-dlp.");
        return Ok(());
    }
    report::write_if_changed(Path::new(report::RAW_FILE), raw)?;

    let streams = catalog::parse_formats(raw, &cfg.resolutions);
    let info = report::render_selection_info(&streams, probe.title.as_deref());
    report::write_if_changed(Path::new(report::INFO_FILE), &info)?;

    if streams.is_empty() {
        prompt.say("No eligible formats found. Check the link and try another.");
        return Ok(());
    }

    prompt.say(&format!("Open \"{}\" and pick the IDs you want.", report::INFO_FILE));
    let chosen = selection::resolve_selection(&streams, prompt)?;
    let expression = chosen.format_expression();
    tracing::info!("selected format expression: {expression}");

    if !ask_yes_no(prompt, "Start download? (y/N): ")? {
        prompt.say("Download cancelled.");
        return Ok(());
    }

    download(cfg, &expression, canonical, prompt).await?;
    Ok(())
}

/// Fetches title/live metadata. The probe is advisory: any failure logs
/// and yields an empty document.
async fn probe_metadata(cfg: &YtpickConfig, canonical: &str) -> ytdlp::ProbeInfo {
    match ytdlp::run_capture(&ytdlp::probe_args(&cfg.js_runtime, canonical), "Probing video info...").await
    {
        Ok(run) if run.success => ytdlp::ProbeInfo::from_json(&run.stdout).unwrap_or_default(),
        Ok(run) => {
            tracing::warn!("probe exited unsuccessfully: {}", run.stderr.trim());
            ytdlp::ProbeInfo::default()
        }
        Err(err) => {
            tracing::warn!("probe failed to run: {err:#}");
            ytdlp::ProbeInfo::default()
        }
    }
}

/// Runs the download and the post-download rename pass.
async fn download(
    cfg: &YtpickConfig,
    expression: &str,
    canonical: &str,
    prompt: &mut dyn Prompt,
) -> Result<()> {
    fs::create_dir_all(&cfg.output_dir)?;
    let before = rename::snapshot_dir(&cfg.output_dir);

    let args = ytdlp::download_args(
        &cfg.js_runtime,
        expression,
        &cfg.output_dir,
        cfg.concurrent_fragments,
        canonical,
    );

    prompt.say("Starting download...");
    match ytdlp::run_download(&args).await {
        Ok(true) => {
            let finals = rename::rename_new_files(&cfg.output_dir, &before);
            tracing::info!("download finished with {} new file(s)", finals.len());
            prompt.say("Download and merge finished.");
        }
        Ok(false) => {
            prompt.say("Something went wrong during the download.");
        }
        Err(err) => {
            tracing::warn!("download failed to start: {err:#}");
            prompt.say("Something went wrong during the download.");
        }
    }
    Ok(())
}

fn ask_yes_no(prompt: &mut dyn Prompt, message: &str) -> Result<bool> {
    let answer = prompt.ask(message)?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}
