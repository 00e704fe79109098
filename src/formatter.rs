//! Decklist formatting

use crate::models::CardRecord;
use crate::query::{SearchOptions, SearchQuery};

/// Numeric sort key of a collector number.
///
/// Digits are extracted from the text ("123a" -> 123). Numbers without any
/// digit, or too long to fit, return None and sort after every numbered card.
pub fn collector_sort_key(collector_number: &str) -> Option<u64> {
    let digits: String = collector_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Stable sort by collector number; unnumbered cards go last
pub fn sort_by_collector_number(cards: &mut [CardRecord]) {
    cards.sort_by_key(|card| match collector_sort_key(&card.collector_number) {
        Some(n) => (false, n),
        None => (true, 0),
    });
}

/// Renders cards as decklist lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecklistFormatter {
    /// Copy count printed before each card, 0 for none
    pub copies: u8,
    pub sort_by_number: bool,
}

impl DecklistFormatter {
    pub fn new(copies: u8, sort_by_number: bool) -> Self {
        Self {
            copies,
            sort_by_number,
        }
    }

    /// "3 Lightning Bolt (NEO)" or "Lightning Bolt (NEO)"
    pub fn format_line(&self, card: &CardRecord) -> String {
        if self.copies > 0 {
            format!("{} {} ({})", self.copies, card.name, card.set_upper())
        } else {
            format!("{} ({})", card.name, card.set_upper())
        }
    }

    pub fn format_all(&self, cards: &[CardRecord]) -> Vec<String> {
        if self.sort_by_number {
            let mut sorted = cards.to_vec();
            sort_by_collector_number(&mut sorted);
            sorted.iter().map(|c| self.format_line(c)).collect()
        } else {
            cards.iter().map(|c| self.format_line(c)).collect()
        }
    }
}

/// Summary printed after the decklist
pub fn format_summary(
    query: &SearchQuery,
    options: &SearchOptions,
    base_url: &str,
    total_cards: usize,
) -> String {
    let colors = query
        .colors()
        .map(|c| c.as_string())
        .unwrap_or_else(|| "any".to_string());

    let mut summary = String::new();
    summary.push_str("Query parameters:\n");
    summary.push_str(&format!("Set: {}\n", query.set_code().to_uppercase()));
    summary.push_str(&format!("Format: {}\n", query.format()));
    summary.push_str(&format!("Colors: {colors}\n"));
    summary.push_str(&format!(
        "Common only: {}\n",
        if query.common_only() { "yes" } else { "no" }
    ));
    summary.push_str(&format!("API call: {}\n", query.api_url(base_url, options)));
    summary.push_str(&format!("Total cards: {total_cards}\n"));
    summary
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
