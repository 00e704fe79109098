//! One complete export run: search, format, print, save

use crate::config::Config;
use crate::error::{Error, Result};
use crate::formatter::{format_summary, DecklistFormatter};
use crate::output::OutputSink;
use crate::paginator::{Paginator, Transport};
use std::future::Future;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub total_cards: usize,
    pub saved_to: Option<PathBuf>,
}

/// Options that are not part of the user-facing config
pub struct RunContext {
    pub request_delay: Duration,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            request_delay: crate::paginator::DEFAULT_REQUEST_DELAY,
            cancel: None,
        }
    }
}

/// Run the whole pipeline, printing the decklist to `out`.
///
/// Nothing is printed if the search fails. A failed file write is returned
/// after the console output has been written.
pub async fn run<T: Transport, W: Write>(
    config: &Config,
    transport: T,
    context: RunContext,
    out: &mut W,
) -> Result<RunReport> {
    let query = config.query()?;
    let options = config.search_options();
    log::info!("Searching Scryfall for: {}", query.to_query_string());

    let mut paginator = Paginator::new(transport, config.api_url.as_str())
        .with_strategy(config.pagination)
        .with_delay(context.request_delay);
    if let Some(cancel) = context.cancel {
        paginator = paginator.with_cancel_flag(cancel);
    }

    let cards = paginator.fetch_all(&query, &options).await?;

    let formatter = DecklistFormatter::new(config.copies, config.sort_by_number);
    let lines = formatter.format_all(&cards);
    let sink = OutputSink::new(config.output.clone(), config.output_mode);

    writeln!(
        out,
        "\nFound {} {}-legal cards in set {}",
        cards.len(),
        query.format(),
        query.set_code().to_uppercase()
    )?;
    writeln!(out, "\nDecklist format:")?;
    writeln!(out, "{}", "-".repeat(40))?;
    sink.print_lines(out, &lines)?;
    writeln!(out)?;
    write!(
        out,
        "{}",
        format_summary(&query, &options, &config.api_url, cards.len())
    )?;
    out.flush()?;

    let saved_to = match sink.persist(&lines, &cards) {
        Ok(saved) => saved,
        Err(e) => {
            log::error!(
                "Failed to save results to {}: {}",
                sink.destination()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                e
            );
            return Err(e);
        }
    };
    if let Some(path) = &saved_to {
        writeln!(out, "\nResults saved to {}", path.display())?;
    }

    Ok(RunReport {
        total_cards: cards.len(),
        saved_to,
    })
}

/// Like [`run`], but gives up as soon as `interrupt` resolves.
///
/// The run is dropped wherever it is, mid-request or mid-output, and
/// [`Error::Cancelled`] is returned. If the interrupt listener itself fails
/// the run continues uninterrupted.
pub async fn run_until_interrupted<T, W, F>(
    config: &Config,
    transport: T,
    context: RunContext,
    out: &mut W,
    interrupt: F,
) -> Result<RunReport>
where
    T: Transport,
    W: Write,
    F: Future<Output = io::Result<()>>,
{
    let export = run(config, transport, context, out);
    tokio::pin!(export);

    let signal = tokio::select! {
        result = &mut export => return result,
        signal = interrupt => signal,
    };

    match signal {
        Ok(()) => {
            log::warn!("Interrupt received, abandoning the export");
            Err(Error::Cancelled)
        }
        Err(e) => {
            log::warn!("Unable to listen for Ctrl-C: {e}");
            export.await
        }
    }
}
