//! Limit order book core: per-side order trees, symbol-scoped books, the
//! lazy book catalog, and typed event dispatch towards the transport layer.

pub mod book;
/// Symbol-to-book directory with lazy creation.
pub mod catalog;
/// Event dispatch over the catalog, with channel-driven runtimes.
pub mod engine;
pub mod error;
/// Typed inbound commands and outbound events.
pub mod events;
pub mod order;
/// Pluggable serialization for outbound engine events.
pub mod serialization;
mod tests;
/// Trade values, listeners, and the outbound trade event envelope.
pub mod trade;
pub mod tree;

pub use book::LimitOrderBook;
pub use catalog::OrderBookCatalog;
pub use engine::{EngineRuntimeStd, EngineRuntimeTokio, MatchingEngine};
pub use error::OrderBookError;
pub use events::{EngineEvent, InboundEvent, OrderCommand, RejectedOrder};
pub use order::{MarketData, Order, OrderKind, Side};
pub use serialization::{EventSerializer, JsonEventSerializer, SerializationError};
pub use trade::{Trade, TradeEvent, TradeListener};
pub use tree::OrderTree;
