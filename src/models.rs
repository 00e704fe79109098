//! Scryfall search response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single card printing returned by the search endpoint.
///
/// Only the fields the decklist needs are typed. The card object itself is
/// kept as received and is what gets serialized back, so the JSON export
/// writes exactly what the API sent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct CardRecord {
    pub name: String,
    pub set: String,
    pub collector_number: String,
    pub rarity: String,
    /// Missing on some multi-faced cards, where colors live on the faces
    pub colors: Option<Vec<String>>,
    pub color_identity: Vec<String>,
    raw: Value,
}

/// Fields read from a card object; everything else stays in `raw`
#[derive(Deserialize)]
struct CardFields {
    name: String,
    set: String,
    collector_number: String,
    rarity: String,
    #[serde(default)]
    colors: Option<Vec<String>>,
    #[serde(default)]
    color_identity: Vec<String>,
}

impl CardRecord {
    /// Set code as printed in a decklist, e.g. "NEO"
    pub fn set_upper(&self) -> String {
        self.set.to_uppercase()
    }

    /// The card object exactly as the API returned it
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl TryFrom<Value> for CardRecord {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = CardFields::deserialize(&raw)?;
        Ok(Self {
            name: fields.name,
            set: fields.set,
            collector_number: fields.collector_number,
            rarity: fields.rarity,
            colors: fields.colors,
            color_identity: fields.color_identity,
            raw,
        })
    }
}

impl From<CardRecord> for Value {
    fn from(card: CardRecord) -> Self {
        card.raw
    }
}

/// One page of `/cards/search` results
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub data: Vec<CardRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub total_cards: Option<u64>,
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
