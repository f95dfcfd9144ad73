//! Symbol-scoped limit order book over a buy tree and a sell tree.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::atomic::AtomicCell;
use tracing::trace;

use super::error::OrderBookError;
use super::order::{MarketData, Order, Side};
use super::trade::{Trade, TradeListener};
use super::tree::OrderTree;

/// Both sides of a book. Kept together so one lock guards them: a match
/// pass reads and mutates both trees and must observe neither mid-insert.
struct SideTrees {
    buy: OrderTree,
    sell: OrderTree,
}

/// A limit order book for a single symbol.
///
/// The book routes order mutations to the correct side, probes both sides
/// for cancels and replaces, and runs the match pass against incoming
/// market-data ranges. All mutating operations are serialized through one
/// per-book write lock; books for different symbols share nothing and never
/// contend.
///
/// The symbol is immutable after construction. Every admitted order must
/// carry it; a mismatch is rejected rather than trusted to the router.
pub struct LimitOrderBook {
    /// The symbol or identifier for this order book.
    symbol: String,

    /// Buy and sell trees behind the per-book critical section.
    trees: RwLock<SideTrees>,

    /// The last price at which a trade occurred.
    last_trade_price: AtomicCell<u128>,

    /// Flag indicating if there was a trade.
    has_traded: AtomicBool,

    /// Listens to trades produced by the match pass.
    trade_listener: Option<TradeListener>,
}

impl LimitOrderBook {
    /// Create a new empty order book for `symbol`.
    #[must_use]
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            trees: RwLock::new(SideTrees {
                buy: OrderTree::new(Side::Buy),
                sell: OrderTree::new(Side::Sell),
            }),
            last_trade_price: AtomicCell::new(0),
            has_traded: AtomicBool::new(false),
            trade_listener: None,
        }
    }

    /// Create a new order book with a trade listener, invoked once per
    /// trade produced by a match pass.
    #[must_use]
    pub fn with_trade_listener(symbol: &str, trade_listener: TradeListener) -> Self {
        let mut book = Self::new(symbol);
        book.trade_listener = Some(trade_listener);
        book
    }

    /// The symbol this book serves.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Admit a resting order, routed to the buy or sell tree by its side.
    ///
    /// # Errors
    /// - [`OrderBookError::SymbolMismatch`] if the order belongs to another
    ///   book.
    /// - [`OrderBookError::DuplicateOrderId`] if the id already rests in
    ///   this book, on either side.
    /// - [`OrderBookError::InvalidQuantity`] if the quantity is zero.
    pub fn add_order(&self, order: Order) -> Result<(), OrderBookError> {
        if order.symbol != self.symbol {
            return Err(OrderBookError::SymbolMismatch {
                expected: self.symbol.clone(),
                actual: order.symbol,
            });
        }

        let mut trees = self.write_trees();
        // An id lives in at most one tree across the whole book, so the
        // opposite side must be probed as well.
        if trees.buy.contains(&order.id) || trees.sell.contains(&order.id) {
            return Err(OrderBookError::DuplicateOrderId(order.id));
        }
        match order.side {
            Side::Buy => trees.buy.add_order(order),
            Side::Sell => trees.sell.add_order(order),
        }
    }

    /// Cancel the resting order with this id, probing the buy tree first,
    /// then the sell tree. Returns the removed order.
    ///
    /// # Errors
    /// Returns [`OrderBookError::OrderNotFound`] when neither tree holds
    /// the id, so "removed nothing" is never mistaken for a cancel.
    pub fn remove_order(&self, id: &str) -> Result<Order, OrderBookError> {
        let mut trees = self.write_trees();
        let removed = if trees.buy.contains(id) {
            trees.buy.remove_order(id)
        } else {
            trees.sell.remove_order(id)
        };
        removed.ok_or_else(|| OrderBookError::OrderNotFound(id.to_string()))
    }

    /// Replace the resting order at `id` with new terms, returning the
    /// displaced order. The replacement stays on the side it rests on; an
    /// id never migrates across trees.
    ///
    /// # Errors
    /// - [`OrderBookError::SymbolMismatch`] for a foreign order.
    /// - [`OrderBookError::OrderNotFound`] when the id rests on neither
    ///   side.
    /// - [`OrderBookError::SideMismatch`] when the replacement carries the
    ///   other side.
    /// - [`OrderBookError::InvalidQuantity`] for a zero quantity.
    pub fn replace_order(&self, id: &str, order: Order) -> Result<Order, OrderBookError> {
        if order.symbol != self.symbol {
            return Err(OrderBookError::SymbolMismatch {
                expected: self.symbol.clone(),
                actual: order.symbol,
            });
        }

        let mut trees = self.write_trees();
        if trees.buy.contains(id) {
            trees.buy.replace_order(id, order)
        } else if trees.sell.contains(id) {
            trees.sell.replace_order(id, order)
        } else {
            Err(OrderBookError::OrderNotFound(id.to_string()))
        }
    }

    /// Run a match pass against a market-data range and produce the
    /// resulting trades, keyed by the matched order's id.
    ///
    /// Buy orders match when their limit is at or above the tick's low;
    /// sell orders when at or below the tick's high. Every matched order is
    /// extracted from its tree in the same critical section that discovered
    /// it, fills in full, and trades at its own limit price: never at an
    /// improved price and never partially.
    pub fn match_orders_to_trade(&self, market_data: &MarketData) -> HashMap<String, Trade> {
        let matched = {
            let mut trees = self.write_trees();
            let mut matched = trees.buy.match_orders(market_data.low);
            matched.extend(trees.sell.match_orders(market_data.high));
            matched
        };

        // Trades are built and listeners run outside the lock; a listener
        // is allowed to read this book.
        let mut trades = HashMap::with_capacity(matched.len());
        for (id, order) in matched {
            let trade = Trade::at_limit(order, &self.symbol);
            self.last_trade_price.store(trade.price);
            self.has_traded.store(true, Ordering::Relaxed);
            if let Some(listener) = &self.trade_listener {
                listener(&trade);
            }
            trades.insert(id, trade);
        }
        if !trades.is_empty() {
            trace!(
                "match pass on {} produced {} trades (low {}, high {})",
                self.symbol,
                trades.len(),
                market_data.low,
                market_data.high
            );
        }
        trades
    }

    /// A snapshot of the resting buy orders, keyed by id.
    #[must_use]
    pub fn buy_orders(&self) -> HashMap<String, Order> {
        self.read_trees().buy.orders()
    }

    /// A snapshot of the resting sell orders, keyed by id.
    #[must_use]
    pub fn sell_orders(&self) -> HashMap<String, Order> {
        self.read_trees().sell.orders()
    }

    /// The highest resting buy limit, if any.
    #[must_use]
    pub fn best_bid(&self) -> Option<u128> {
        self.read_trees().buy.best_price()
    }

    /// The lowest resting sell limit, if any.
    #[must_use]
    pub fn best_ask(&self) -> Option<u128> {
        self.read_trees().sell.best_price()
    }

    /// Total number of resting orders on both sides.
    #[must_use]
    pub fn order_count(&self) -> usize {
        let trees = self.read_trees();
        trees.buy.len() + trees.sell.len()
    }

    /// The price of the most recent trade, or `None` if this book has
    /// never traded.
    #[must_use]
    pub fn last_trade_price(&self) -> Option<u128> {
        if self.has_traded.load(Ordering::Relaxed) {
            Some(self.last_trade_price.load())
        } else {
            None
        }
    }

    fn write_trees(&self) -> std::sync::RwLockWriteGuard<'_, SideTrees> {
        // A poisoned lock means a panic while mutating a tree; the tree
        // types themselves never panic mid-mutation, so recover the guard.
        self.trees.write().unwrap_or_else(|poison| poison.into_inner())
    }

    fn read_trees(&self) -> std::sync::RwLockReadGuard<'_, SideTrees> {
        self.trees.read().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl std::fmt::Debug for LimitOrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LimitOrderBook")
            .field("symbol", &self.symbol)
            .field("orders", &self.order_count())
            .field("last_trade_price", &self.last_trade_price())
            .finish()
    }
}
