//! CLI for the ytpick interactive downloader.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ytpick_core::{config, tools};

use crate::prompt::StdinPrompt;
use crate::session;

/// Interactive yt-dlp front-end: list a video's formats, pick stream IDs,
/// download and merge.
#[derive(Debug, Parser)]
#[command(name = "ytpick")]
#[command(about = "Pick and download YouTube streams through yt-dlp", long_about = None)]
pub struct Cli {
    /// YouTube link to start with (prompted for when omitted).
    pub link: Option<String>,

    /// Directory downloaded files land in (overrides the config file).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Resolution token accepted for video rows, e.g. 1080 (repeatable;
    /// overrides the config file).
    #[arg(long = "resolution", value_name = "TOKEN")]
    pub resolutions: Vec<String>,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        if let Some(dir) = cli.output_dir {
            cfg.output_dir = dir;
        }
        if !cli.resolutions.is_empty() {
            cfg.resolutions = cli.resolutions;
        }

        if let Err(missing) = tools::check_requirements(&cfg.js_runtime) {
            eprintln!("{missing}");
            eprintln!("Install the missing tools and try again.");
            std::process::exit(1);
        }

        let mut prompt = StdinPrompt;
        session::run(&cfg, cli.link, &mut prompt).await
    }
}
