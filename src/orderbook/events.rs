//! Typed inbound commands and outbound events.
//!
//! The core is driven exclusively through these enums: the transport layer
//! (FIX gateways, Kafka consumers) deserializes into an [`InboundEvent`]
//! and serializes [`EngineEvent`]s back out. No framework listeners and no
//! dynamic dispatch: one explicit variant per event kind.

use serde::{Deserialize, Serialize};

use crate::orderbook::order::{MarketData, Order};
use crate::orderbook::trade::TradeEvent;

/// An order instruction from the intake pipeline.
///
/// The intent (new / cancel / replace) is decided upstream, at the gateway
/// that validated the FIX message; the core only applies the data
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    /// Admit a new resting order. Creates the symbol's book on first use.
    Submit(Order),

    /// Cancel the resting order with the given id.
    Cancel {
        /// Symbol of the book holding the order.
        symbol: String,
        /// The resting order's id.
        id: String,
    },

    /// Replace the resting order with the given id with new terms.
    Replace {
        /// Symbol of the book holding the order.
        symbol: String,
        /// The resting order's id.
        id: String,
        /// The replacement order.
        order: Order,
    },
}

/// An inbound event as delivered by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundEvent {
    /// An order instruction, keyed by an opaque routing key.
    Order {
        /// The routing key the instruction arrived under.
        key: String,
        /// The instruction itself.
        command: OrderCommand,
    },

    /// A market-data tick for one symbol.
    MarketData(MarketData),
}

/// An order instruction that could not be applied, reported back so the
/// gateway layer can translate it into a protocol-level reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedOrder {
    /// The routing key of the failed instruction.
    pub key: String,
    /// The order carried by the instruction, when it carried one.
    pub order: Option<Order>,
    /// Human-readable reason for the rejection.
    pub reason: String,
}

/// Everything the engine emits downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A fill produced by a match pass; one event per matched order.
    Trade(TradeEvent),

    /// An order instruction the core refused.
    Rejected(RejectedOrder),
}
