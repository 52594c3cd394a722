//! Display-only cache for market quotes resolved by an external feed.
//!
//! The cache never participates in snapshot persistence. Fetches may race;
//! every fetch carries a sequence token and responses older than the last
//! applied one are discarded.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CoreError;

/// A single priced symbol as reported by the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    pub fn is_increasing(&self) -> bool {
        self.change_24h > 0.0
    }
}

/// Collaborator that resolves current prices for a set of symbols. No
/// transport is imposed; implementations may be REST clients, fixtures, or
/// anything else.
pub trait QuoteFeed {
    fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>, CoreError>;
}

/// Latest applied quotes keyed by symbol.
#[derive(Debug, Default)]
pub struct QuoteBoard {
    quotes: HashMap<String, Quote>,
    next_token: u64,
    applied_token: u64,
    last_update: Option<DateTime<Utc>>,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the ordering token for a fetch that is about to start.
    /// Tokens increase monotonically.
    pub fn begin_fetch(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    /// Installs fetched quotes unless a newer response already landed.
    /// Returns `false` when the response was stale and dropped.
    pub fn apply(&mut self, token: u64, quotes: Vec<Quote>) -> bool {
        if token <= self.applied_token {
            debug!(token, applied = self.applied_token, "dropping stale quote response");
            return false;
        }
        self.applied_token = token;
        self.last_update = Some(Utc::now());
        for quote in quotes {
            self.quotes.insert(quote.symbol.clone(), quote);
        }
        true
    }

    /// Fetches synchronously through the feed and applies the result under
    /// a fresh token.
    pub fn refresh(&mut self, feed: &dyn QuoteFeed, symbols: &[String]) -> Result<bool, CoreError> {
        let token = self.begin_fetch();
        let quotes = feed.fetch_quotes(symbols)?;
        Ok(self.apply(token, quotes))
    }

    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    pub fn quotes(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.values()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }
}
