//! Set Decklist - MTG set exporter
//!
//! Pages through Scryfall search results for a set and legality format and
//! turns them into a decklist, printed to the console and optionally saved.

pub mod app;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod output;
pub mod paginator;
pub mod prompt;
pub mod query;

pub use config::{Args, Config};
pub use error::{Error, Result};
pub use formatter::{collector_sort_key, sort_by_collector_number, DecklistFormatter};
pub use models::{CardRecord, SearchPage};
pub use output::{OutputMode, OutputSink};
pub use paginator::{
    HttpTransport, PageCursor, PaginationStrategy, Paginator, Transport, TransportResponse,
};
pub use query::{ColorFilter, Format, SearchOptions, SearchOrder, SearchQuery, UniqueMode};
