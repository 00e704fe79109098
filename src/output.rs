//! Console and file output for decklists

use crate::error::Result;
use crate::models::CardRecord;
use crate::query::Format;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What gets written to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// One decklist line per card
    #[default]
    Text,
    /// Pretty-printed array of the raw card objects
    Json,
}

impl OutputMode {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputMode::Text => "txt",
            OutputMode::Json => "json",
        }
    }

    pub fn parse_answer(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "t" | "txt" | "text" => Some(OutputMode::Text),
            "j" | "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// File name used when the user wants a file but did not name one
pub fn default_output_path(format: Format, set_code: &str, mode: OutputMode) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}_decklist.{}",
        format,
        set_code.to_lowercase(),
        mode.extension()
    ))
}

/// Writes decklists to the console and, optionally, to a file
pub struct OutputSink {
    destination: Option<PathBuf>,
    mode: OutputMode,
}

impl OutputSink {
    pub fn new(destination: Option<PathBuf>, mode: OutputMode) -> Self {
        Self { destination, mode }
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// Print every line to the console writer
    pub fn print_lines<W: Write>(&self, out: &mut W, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write to the configured destination, if any.
    ///
    /// Returns the path written. Console output is never affected by a
    /// failure here.
    pub fn persist(&self, lines: &[String], cards: &[CardRecord]) -> Result<Option<PathBuf>> {
        let Some(path) = &self.destination else {
            return Ok(None);
        };
        write_to_file(path, self.mode, lines, cards)?;
        Ok(Some(path.clone()))
    }
}

/// Create missing parent directories, then write lines or cards to `path`
pub fn write_to_file(
    path: &Path,
    mode: OutputMode,
    lines: &[String],
    cards: &[CardRecord],
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            log::info!("Created directory: {}", parent.display());
        }
    }

    let content = match mode {
        OutputMode::Text => {
            let mut text = String::new();
            for line in lines {
                text.push_str(line);
                text.push('\n');
            }
            text
        }
        OutputMode::Json => serde_json::to_string_pretty(cards)?,
    };

    fs::write(path, &content)?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
