/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/10/25
******************************************************************************/
use crate::orderbook::order::Order;
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A fill produced by a match pass.
///
/// Derived and ephemeral: the book constructs a fresh `Trade` per matched
/// order and retains nothing. The fill is always at the resting order's own
/// limit price for its full quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// The resting order that filled.
    pub order: Order,
    /// The symbol of the book that produced the fill.
    pub symbol: String,
    /// Execution price in ticks. Equal to the order's limit price.
    pub price: u128,
    /// Executed quantity. Equal to the order's full quantity.
    pub quantity: u64,
}

impl Trade {
    /// Build the trade for a resting order that crossed: filled in full at
    /// its own limit price.
    #[must_use]
    pub fn at_limit(order: Order, symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: order.price,
            quantity: order.quantity,
            order,
        }
    }
}

/// Trade listener specification using Arc for shared ownership.
pub type TradeListener = Arc<dyn Fn(&Trade) + Send + Sync>;

/// The outbound trade record, keyed for the transport layer.
///
/// One event is emitted per matched order. `key` is the matched order's id,
/// which is also the partition key downstream; `event_id` uniquely
/// identifies the emission itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEvent {
    /// The matched order's id, used as the outbound routing key.
    pub key: String,
    /// The fill this event reports.
    pub trade: Trade,
    /// Unique identifier for this event.
    pub event_id: Uuid,
    /// Unix timestamp in milliseconds when the event was created.
    pub timestamp: u64,
}

impl TradeEvent {
    /// Wrap a trade for emission, minting a fresh event id and timestamp.
    #[must_use]
    pub fn new(key: String, trade: Trade) -> Self {
        Self {
            key,
            trade,
            event_id: Uuid::new_v4(),
            timestamp: current_time_millis(),
        }
    }
}
