//! Run configuration
//!
//! Flags and interactive answers both end up in a [`Config`] and go through
//! the same validators below.

use crate::error::{Error, Result};
use crate::output::OutputMode;
use crate::paginator::{PaginationStrategy, SCRYFALL_API_URL};
use crate::query::{
    validate_set_code, ColorFilter, Format, SearchOptions, SearchOrder, SearchQuery, UniqueMode,
};
use clap::Parser;
use std::path::PathBuf;

/// Highest copy count that makes sense in a 60-card deck
pub const MAX_COPIES: u8 = 4;

/// Export every card of a set that is legal in a format as a decklist
#[derive(Parser, Debug)]
#[command(name = "set_decklist")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Set code to search, e.g. "neo". Without it the interactive prompts run
    #[arg(short, long)]
    pub set: Option<String>,

    /// Legality format, by name or menu number. Menu: 1 = standard,
    /// 2 = modern, 3 = legacy, 4 = vintage, 5 = commander, 6 = pauper,
    /// 7 = pioneer, 8 = brawl, 9 = historic, 10 = penny [default: pauper]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Only cards of these colors, letters from "wubrg" (e.g. "ur")
    #[arg(short, long)]
    pub colors: Option<String>,

    /// Only common cards
    #[arg(long, default_value_t = false)]
    pub common_only: bool,

    /// Number placed before each card, 0 for none (0-4) [default: 0]
    #[arg(short = 'n', long)]
    pub copies: Option<u8>,

    /// Sort the list by collector number instead of the server order
    #[arg(long, default_value_t = false)]
    pub sort_by_number: bool,

    /// Save the result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the raw cards as JSON instead of the decklist text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Sort order requested from Scryfall
    #[arg(long, value_enum, default_value_t = SearchOrder::Name)]
    pub order: SearchOrder,

    /// Ask Scryfall to return every printing / artwork instead of one per card
    #[arg(long, value_enum)]
    pub unique: Option<UniqueMode>,

    /// Pagination protocol
    #[arg(long, value_enum, default_value_t = PaginationStrategy::Cursor)]
    pub pagination: PaginationStrategy,

    /// Scryfall API base URL
    #[arg(long, default_value = SCRYFALL_API_URL)]
    pub api_url: String,

    /// Debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Prompt for every option not given as a flag, even when --set is given
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,
}

impl Args {
    /// Whether the interactive prompt flow should fill the config
    pub fn wants_prompts(&self) -> bool {
        self.interactive || self.set.is_none()
    }

    /// `--format`, or the default format when the flag is absent
    pub fn format(&self) -> Result<Format> {
        match &self.format {
            Some(selection) => Format::parse_selection(selection),
            None => Ok(Format::default()),
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

/// Everything one run needs
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub set_code: String,
    pub format: Format,
    pub colors: Option<ColorFilter>,
    pub common_only: bool,
    pub copies: u8,
    pub sort_by_number: bool,
    pub output: Option<PathBuf>,
    pub output_mode: OutputMode,
    pub order: SearchOrder,
    pub unique: Option<UniqueMode>,
    pub pagination: PaginationStrategy,
    pub api_url: String,
    pub verbose: bool,
}

impl Config {
    /// Validate flag-mode arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let set = args
            .set
            .as_deref()
            .ok_or_else(|| Error::invalid("--set is required"))?;

        Ok(Self {
            set_code: validate_set_code(set)?,
            format: args.format()?,
            colors: parse_colors(args.colors.as_deref().unwrap_or_default())?,
            common_only: args.common_only,
            copies: validate_copies(args.copies.unwrap_or_default())?,
            sort_by_number: args.sort_by_number,
            output: args.output.clone(),
            output_mode: args.output_mode(),
            order: args.order,
            unique: args.unique,
            pagination: args.pagination,
            api_url: validate_api_url(&args.api_url)?,
            verbose: args.verbose,
        })
    }

    pub fn query(&self) -> Result<SearchQuery> {
        Ok(SearchQuery::new(&self.set_code, self.format)?
            .with_colors(self.colors.clone())
            .with_common_only(self.common_only))
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            order: self.order,
            unique: self.unique,
        }
    }
}

/// Blank input means no color filter
pub fn parse_colors(input: &str) -> Result<Option<ColorFilter>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    ColorFilter::parse(input).map(Some)
}

pub fn validate_copies(copies: u8) -> Result<u8> {
    if copies > MAX_COPIES {
        return Err(Error::invalid(format!(
            "copies must be between 0 and {MAX_COPIES}, got {copies}"
        )));
    }
    Ok(copies)
}

/// Parse a copy count typed by the user
pub fn parse_copies(input: &str) -> Result<u8> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    let copies = input
        .parse::<u8>()
        .map_err(|_| Error::invalid(format!("'{input}' is not a number between 0 and {MAX_COPIES}")))?;
    validate_copies(copies)
}

pub fn validate_api_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::invalid(format!(
            "API url '{url}' must start with http:// or https://"
        )));
    }
    Ok(url.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
