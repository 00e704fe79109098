//! Paginated Scryfall search client
//!
//! Walks every page of a `/cards/search` result, one request at a time, with a
//! fixed pause between requests to stay inside Scryfall's rate limit.

use crate::error::{Error, Result};
use crate::models::{CardRecord, ScryfallError, SearchPage};
use crate::query::{SearchOptions, SearchQuery};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Scryfall asks for 50-100 ms between requests
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "set_decklist/1.0";

/// Raw HTTP answer, before status checking and decoding
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET request. Swapped for a stub in tests.
#[async_trait]
pub trait Transport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<TransportResponse>;
}

/// Upper bound for one request, so a stalled connection cannot hang the run
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<TransportResponse> {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");
        // next_page URLs already carry their query string
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

/// How the next page is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PaginationStrategy {
    /// Client-incremented `page` parameter, driven by `has_more`
    #[value(name = "page")]
    PageNumber,
    /// Follow the server's `next_page` URL
    #[default]
    Cursor,
}

/// Position of the next request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    Page(u32),
    Next(String),
}

impl PageCursor {
    /// Where to go after `page`, or None when the search is exhausted
    fn advance(&self, strategy: PaginationStrategy, page: &SearchPage) -> Option<PageCursor> {
        match strategy {
            PaginationStrategy::PageNumber => match self {
                PageCursor::Page(n) if page.has_more => Some(PageCursor::Page(n + 1)),
                _ => None,
            },
            PaginationStrategy::Cursor => page.next_page.clone().map(PageCursor::Next),
        }
    }
}

/// Collects every card matching a search
pub struct Paginator<T: Transport> {
    transport: T,
    base_url: String,
    strategy: PaginationStrategy,
    delay: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl<T: Transport> Paginator<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            strategy: PaginationStrategy::default(),
            delay: DEFAULT_REQUEST_DELAY,
            cancel: None,
        }
    }

    pub fn with_strategy(mut self, strategy: PaginationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Flag checked before each follow-up request; setting it aborts the fetch
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn search_url(&self) -> String {
        format!("{}/cards/search", self.base_url)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Fetch all pages. Any failed page fails the whole search.
    pub async fn fetch_all(
        &self,
        query: &SearchQuery,
        options: &SearchOptions,
    ) -> Result<Vec<CardRecord>> {
        let mut cards = Vec::new();
        // Both strategies open with the plain search
        let mut cursor = PageCursor::Page(1);
        let mut page_count: u32 = 0;

        loop {
            page_count += 1;
            let (url, params) = self.request_for(&cursor, query, options);
            log::debug!("Requesting page {} from {}", page_count, url);

            let page = self.fetch_page(&url, &params).await?;
            if page_count == 1 {
                if let Some(total) = page.total_cards {
                    log::info!("Search matched {} cards", total);
                }
            }

            let next = cursor.advance(self.strategy, &page);
            log::info!(
                "Fetched page {} - found {} cards",
                page_count,
                page.data.len()
            );
            cards.extend(page.data);

            match next {
                Some(next) => {
                    tokio::time::sleep(self.delay).await;
                    if self.is_cancelled() {
                        log::warn!("Fetch cancelled after {} page(s)", page_count);
                        return Err(Error::Cancelled);
                    }
                    cursor = next;
                }
                None => break,
            }
        }

        log::info!(
            "Fetched {} cards across {} page(s)",
            cards.len(),
            page_count
        );
        Ok(cards)
    }

    fn request_for(
        &self,
        cursor: &PageCursor,
        query: &SearchQuery,
        options: &SearchOptions,
    ) -> (String, Vec<(String, String)>) {
        match cursor {
            PageCursor::Next(url) => (url.clone(), Vec::new()),
            PageCursor::Page(n) => {
                let mut params = vec![("q".to_string(), query.to_query_string())];
                params.extend(options.params());
                if self.strategy == PaginationStrategy::PageNumber {
                    params.push(("page".to_string(), n.to_string()));
                }
                (self.search_url(), params)
            }
        }
    }

    async fn fetch_page(&self, url: &str, params: &[(String, String)]) -> Result<SearchPage> {
        let response = self.transport.get(url, params).await?;

        if !response.is_success() {
            let details = serde_json::from_str::<ScryfallError>(&response.body)
                .ok()
                .map(|e| format!("{} ({})", e.details, e.code));
            log::error!("Search request failed with status {}", response.status);
            return Err(Error::HttpStatus {
                status: response.status,
                url: url.to_string(),
                details,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

#[cfg(test)]
#[path = "paginator_tests.rs"]
mod tests;
