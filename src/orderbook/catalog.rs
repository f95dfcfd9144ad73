/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/10/25
******************************************************************************/

//! Symbol-to-book directory with lazy creation.
//!
//! The catalog is the single shared entry point for every consumer of order
//! and market-data events. Books are created on the first order for a
//! symbol and live until an explicit clear; lookups for market data never
//! create.

use crate::orderbook::book::LimitOrderBook;
use crate::orderbook::trade::TradeListener;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

/// A registry mapping symbol to its [`LimitOrderBook`].
///
/// Create-if-absent is linearizable: concurrent [`Self::get_or_create`]
/// calls for one symbol always return the same book instance. Different
/// symbols' books never contend; the registry's own sharding is the only
/// transient synchronization between them.
///
/// Construct one catalog at process start and hand it to all consumers by
/// `Arc`; there is no ambient global instance.
pub struct OrderBookCatalog {
    /// Collection of order books indexed by symbol.
    books: DashMap<String, Arc<LimitOrderBook>>,

    /// Listener wired into every lazily created book.
    trade_listener: Option<TradeListener>,
}

impl OrderBookCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            trade_listener: None,
        }
    }

    /// Create an empty catalog whose books all share one trade listener.
    #[must_use]
    pub fn with_trade_listener(trade_listener: TradeListener) -> Self {
        Self {
            books: DashMap::new(),
            trade_listener: Some(trade_listener),
        }
    }

    /// Get the order book for a symbol. Pure lookup: returns `None` until
    /// the first order for the symbol has been admitted.
    #[must_use]
    pub fn get_book(&self, symbol: &str) -> Option<Arc<LimitOrderBook>> {
        self.books.get(symbol).map(|entry| Arc::clone(entry.value()))
    }

    /// Get the order book for a symbol, constructing and registering an
    /// empty one if absent.
    #[must_use]
    pub fn get_or_create(&self, symbol: &str) -> Arc<LimitOrderBook> {
        let entry = self.books.entry(symbol.to_string()).or_insert_with(|| {
            info!("creating order book for symbol: {}", symbol);
            let book = match &self.trade_listener {
                Some(listener) => {
                    LimitOrderBook::with_trade_listener(symbol, Arc::clone(listener))
                }
                None => LimitOrderBook::new(symbol),
            };
            Arc::new(book)
        });
        Arc::clone(entry.value())
    }

    /// Check if a book exists for a specific symbol.
    #[must_use]
    pub fn has_book(&self, symbol: &str) -> bool {
        self.books.contains_key(symbol)
    }

    /// Get the number of order books in this catalog.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Get the list of all symbols with order books in this catalog.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.books.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Remove the order book for a specific symbol.
    pub fn remove_book(&self, symbol: &str) -> Option<Arc<LimitOrderBook>> {
        let removed = self.books.remove(symbol).map(|(_, book)| book);
        if removed.is_some() {
            info!("removed order book for symbol: {}", symbol);
        }
        removed
    }

    /// Remove all books. Used to reset state between test scenarios or on
    /// an administrative reset.
    pub fn clear(&self) {
        self.books.clear();
        info!("order book catalog cleared");
    }
}

impl Default for OrderBookCatalog {
    fn default() -> Self {
        Self::new()
    }
}
