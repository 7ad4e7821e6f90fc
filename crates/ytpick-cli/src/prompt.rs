//! Stdin-backed prompt used by the interactive session.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use ytpick_core::selection::Prompt;

/// Reads answers line by line from standard input, blocking indefinitely.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        print!("{message}");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            bail!("standard input closed");
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}
