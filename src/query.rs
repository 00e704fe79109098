//! Search query construction
//!
//! Turns a set code, a legality format and optional filters into the
//! Scryfall search syntax, e.g. `f:pauper e:neo c:ur`.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Legality formats accepted by the search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    Standard,
    Modern,
    Legacy,
    Vintage,
    Commander,
    #[default]
    Pauper,
    Pioneer,
    Brawl,
    Historic,
    Penny,
}

impl Format {
    /// All formats in menu order
    pub const ALL: [Format; 10] = [
        Format::Standard,
        Format::Modern,
        Format::Legacy,
        Format::Vintage,
        Format::Commander,
        Format::Pauper,
        Format::Pioneer,
        Format::Brawl,
        Format::Historic,
        Format::Penny,
    ];

    /// Name as used by the search syntax (e.g. "pauper")
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Standard => "standard",
            Format::Modern => "modern",
            Format::Legacy => "legacy",
            Format::Vintage => "vintage",
            Format::Commander => "commander",
            Format::Pauper => "pauper",
            Format::Pioneer => "pioneer",
            Format::Brawl => "brawl",
            Format::Historic => "historic",
            Format::Penny => "penny",
        }
    }

    /// 1-based position in [`Format::ALL`]
    pub fn menu_number(&self) -> usize {
        Format::ALL
            .iter()
            .position(|f| f == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Look up a format by its 1-based menu number
    pub fn from_menu_number(number: usize) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Format::ALL.get(i).copied())
            .ok_or_else(|| {
                Error::invalid(format!(
                    "format number must be between 1 and {}, got {number}",
                    Format::ALL.len()
                ))
            })
    }

    /// Accepts either a menu number or a format name
    pub fn parse_selection(input: &str) -> Result<Self> {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(number) => Format::from_menu_number(number),
            Err(_) => input.parse(),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Format::ALL.iter().map(Format::as_str).collect();
                Error::invalid(format!(
                    "unknown format '{}', expected one of: {}",
                    s.trim(),
                    names.join(", ")
                ))
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color filter, a non-empty subset of WUBRG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFilter {
    colors: Vec<char>,
}

impl ColorFilter {
    const ALPHABET: [char; 5] = ['w', 'u', 'b', 'r', 'g'];

    /// Parse color letters such as "ur" or "WU". Repeated letters collapse.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(Error::invalid("color filter must not be empty"));
        }
        if let Some(bad) = input.chars().find(|c| !Self::ALPHABET.contains(c)) {
            return Err(Error::invalid(format!(
                "invalid color '{bad}', colors must be letters from w, u, b, r, g"
            )));
        }
        // Canonical WUBRG order keeps the clause stable regardless of input order
        let colors = Self::ALPHABET
            .iter()
            .copied()
            .filter(|c| input.contains(*c))
            .collect();
        Ok(Self { colors })
    }

    pub fn as_string(&self) -> String {
        self.colors.iter().collect()
    }
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Sort key requested from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SearchOrder {
    #[default]
    Name,
    Set,
}

impl SearchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Name => "name",
            SearchOrder::Set => "set",
        }
    }
}

/// Server-side deduplication mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UniqueMode {
    Cards,
    Art,
    Prints,
}

impl UniqueMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueMode::Cards => "cards",
            UniqueMode::Art => "art",
            UniqueMode::Prints => "prints",
        }
    }
}

/// Request options sent next to the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub order: SearchOrder,
    pub unique: Option<UniqueMode>,
}

impl SearchOptions {
    /// Query parameters other than `q` and `page`
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("order".to_string(), self.order.as_str().to_string())];
        if let Some(unique) = self.unique {
            params.push(("unique".to_string(), unique.as_str().to_string()));
        }
        params
    }
}

/// A validated search, built once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    set_code: String,
    format: Format,
    colors: Option<ColorFilter>,
    common_only: bool,
}

impl SearchQuery {
    pub fn new(set_code: &str, format: Format) -> Result<Self> {
        Ok(Self {
            set_code: validate_set_code(set_code)?,
            format,
            colors: None,
            common_only: false,
        })
    }

    pub fn with_colors(mut self, colors: Option<ColorFilter>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_common_only(mut self, common_only: bool) -> Self {
        self.common_only = common_only;
        self
    }

    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn colors(&self) -> Option<&ColorFilter> {
        self.colors.as_ref()
    }

    pub fn common_only(&self) -> bool {
        self.common_only
    }

    /// Render the Scryfall search string, one `key:value` token per clause
    pub fn to_query_string(&self) -> String {
        let mut clauses = vec![
            format!("f:{}", self.format),
            format!("e:{}", self.set_code),
        ];
        if let Some(colors) = &self.colors {
            clauses.push(format!("c:{colors}"));
        }
        if self.common_only {
            clauses.push("r:common".to_string());
        }
        clauses.join(" ")
    }

    /// Full URL of the first search request, for display
    pub fn api_url(&self, base_url: &str, options: &SearchOptions) -> String {
        let mut url = format!(
            "{}/cards/search?q={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&self.to_query_string())
        );
        for (key, value) in options.params() {
            url.push_str(&format!("&{key}={}", urlencoding::encode(&value)));
        }
        url
    }
}

/// Normalise a set code: trimmed, lower-case, no whitespace or ':'
pub fn validate_set_code(input: &str) -> Result<String> {
    let code = input.trim();
    if code.is_empty() {
        return Err(Error::invalid("set code must not be empty"));
    }
    if code.chars().any(|c| c.is_whitespace() || c == ':') {
        return Err(Error::invalid(format!(
            "set code '{code}' must be a single word such as 'neo'"
        )));
    }
    Ok(code.to_lowercase())
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
