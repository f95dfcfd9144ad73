//! Order book error types

use crate::orderbook::order::Side;
use std::fmt;

/// Errors that can occur within the order book core.
///
/// All variants are local, synchronous, and recoverable: the core returns
/// them to the caller and never panics on bad input. The surrounding
/// transport layer decides whether an error becomes a rejection event, a
/// log line, or a dropped message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// Remove or replace was called with an id absent from both trees.
    OrderNotFound(String),

    /// Add was called with an id that is already resting.
    DuplicateOrderId(String),

    /// An order reached a tree whose side differs from the order's, or a
    /// replacement would move an id across sides.
    SideMismatch {
        /// The side of the tree (or of the resting order being replaced).
        expected: Side,
        /// The side carried by the offending order.
        actual: Side,
    },

    /// An order was routed to a book for a different symbol.
    SymbolMismatch {
        /// The symbol of the book.
        expected: String,
        /// The symbol carried by the offending order.
        actual: String,
    },

    /// An order was admitted with a zero quantity. Resting orders always
    /// have quantity greater than zero.
    InvalidQuantity {
        /// The order id that failed validation.
        id: String,
        /// The offending quantity.
        quantity: u64,
    },

    /// A cancel or replace referenced a symbol with no book.
    UnknownSymbol(String),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::OrderNotFound(id) => write!(f, "order not found: {id}"),
            OrderBookError::DuplicateOrderId(id) => write!(f, "duplicate order id: {id}"),
            OrderBookError::SideMismatch { expected, actual } => {
                write!(f, "side mismatch: expected {expected}, got {actual}")
            }
            OrderBookError::SymbolMismatch { expected, actual } => {
                write!(f, "symbol mismatch: expected {expected}, got {actual}")
            }
            OrderBookError::InvalidQuantity { id, quantity } => {
                write!(f, "invalid quantity {quantity} for order {id}")
            }
            OrderBookError::UnknownSymbol(symbol) => write!(f, "unknown symbol: {symbol}"),
        }
    }
}

impl std::error::Error for OrderBookError {}
