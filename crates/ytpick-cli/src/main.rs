use ytpick_core::logging;

mod cli;
mod prompt;
mod session;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and run the interactive session.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("ytpick error: {:#}", err);
        std::process::exit(1);
    }
}
