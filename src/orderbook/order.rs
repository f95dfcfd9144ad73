//! Domain types shared across the matching core: order, side, and
//! market-data tick.
//!
//! Prices are integer ticks (the smallest representable price increment of
//! the platform) and quantities are whole units. Both are fixed at admission
//! time; an [`Order`] is an immutable value once it rests in a tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The side of an order, and of the tree that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// A bid. Best price is the highest limit.
    Buy,
    /// An offer. Best price is the lowest limit.
    Sell,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// The kind of an order. Only limit orders rest in a book; the enum is
/// non-exhaustive so the intake layer can grow kinds without breaking
/// downstream matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum OrderKind {
    /// Trade at the limit price or better, resting until matched or
    /// cancelled.
    Limit,
}

/// An admitted order. Immutable once resting; a replace transfers ownership
/// of the tree slot to a new `Order` value rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order id, unique across the whole book. This is the routing key the
    /// intake pipeline addresses the order by.
    pub id: String,
    /// The account that owns the order.
    pub owner: String,
    /// Instrument symbol. Must match the symbol of the book the order is
    /// admitted to.
    pub symbol: String,
    /// Remaining quantity. Always greater than zero for a resting order; a
    /// fully consumed order is removed, never left at zero.
    pub quantity: u64,
    /// Buy or sell.
    pub side: Side,
    /// Order kind. Only [`OrderKind::Limit`] is admitted.
    pub kind: OrderKind,
    /// Limit price in integer ticks.
    pub price: u128,
    /// The client-assigned order id from the originating FIX session.
    pub client_order_id: String,
}

impl Order {
    /// Construct a limit order.
    pub fn limit(
        id: &str,
        owner: &str,
        symbol: &str,
        quantity: u64,
        side: Side,
        price: u128,
        client_order_id: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            owner: owner.to_string(),
            symbol: symbol.to_string(),
            quantity,
            side,
            kind: OrderKind::Limit,
            price,
            client_order_id: client_order_id.to_string(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}@{} ({})",
            self.side, self.quantity, self.symbol, self.price, self.id
        )
    }
}

/// A market-data tick for one symbol: an OHLC-style price-range summary.
///
/// Read-only input to a match pass; the book never stores it. The `low` of
/// the range drives buy-side matching, the `high` drives sell-side matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketData {
    /// Instrument symbol the tick belongs to.
    pub symbol: String,
    /// Opening price of the interval, in ticks.
    pub open: u128,
    /// Highest traded price of the interval, in ticks.
    pub high: u128,
    /// Lowest traded price of the interval, in ticks.
    pub low: u128,
    /// Closing price of the interval, in ticks.
    pub close: u128,
    /// Traded volume over the interval. Carried for downstream consumers;
    /// the match pass itself is volume-blind.
    pub volume: u64,
}
