//! Set Decklist - MTG set exporter
//!
//! Fetches every card of a set that is legal in a format from Scryfall and
//! prints it as a decklist, optionally saving it to a file.

use clap::Parser;
use set_decklist::app::{run_until_interrupted, RunContext};
use set_decklist::prompt::Prompter;
use set_decklist::{Args, Config, Error, HttpTransport};
use std::io;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = if args.wants_prompts() {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        match prompter.collect_config(&args) {
            Ok(config) => config,
            // only a bad flag gets here, bad answers are asked again
            Err(e @ Error::InvalidArgument(_)) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        match Config::from_args(&args) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        }
    };

    // Initialize logging. RUST_LOG overrides the level chosen here.
    let default_level = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::debug!("Configuration: {:?}", config);

    let transport = match HttpTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    // Ctrl-C abandons the export wherever it is, nothing is saved
    let interrupt = tokio::signal::ctrl_c();
    match run_until_interrupted(&config, transport, RunContext::default(), &mut stdout, interrupt)
        .await
    {
        Ok(report) => {
            log::info!("Done: {} cards", report.total_cards);
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            if e.is_fetch_error() || matches!(e, Error::Cancelled) {
                eprintln!("Error: {e}. The card list is incomplete and was not written.");
            } else {
                eprintln!("Error: {e}");
            }
            std::process::exit(1);
        }
    }
}
