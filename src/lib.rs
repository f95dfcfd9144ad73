//! # Market-Data-Driven Limit Order Book
//!
//! A symbol-scoped limit order book and matching core for a broker platform, written in Rust. Resting buy and sell limit orders are held in strict price-time priority and matched against incoming market-data price ranges rather than against each other.
//!
//! ## Key Features
//!
//! - **Price-Time Priority**: Each side of a book keeps its resting orders ordered by limit price, with arrival order breaking ties at a price level.
//!
//! - **Range Matching**: A market-data tick (open/high/low/close/volume) drives the match pass. Every buy order whose limit is reachable by the tick's low and every sell order whose limit is reachable by the tick's high fills in full, at its own limit price.
//!
//! - **Lazy Book Catalog**: Books are created on the first order for a symbol and shared through an [`OrderBookCatalog`]. Create-if-absent is linearizable, so concurrent intake for one symbol always observes a single book instance.
//!
//! - **Explicit Concurrency**: All mutations on a single book, including the match pass, run inside one per-book critical section. Books for different symbols never contend with each other.
//!
//! - **Typed Event Dispatch**: Inbound order instructions and market-data ticks arrive as explicit command enums; trades and rejections leave as explicit event enums. No framework listeners, no ambient global state.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Every operation maintains the book invariants: one side per tree, unique order ids, no zero-quantity resting orders, and a match pass that discovers and extracts atomically.
//! 2. **Explicitness**: Absent-id removals, duplicate ids, and side/symbol mismatches are typed errors, never silent nulls or overwrites.
//! 3. **Isolation**: The core performs no I/O and never blocks on the outside world; the surrounding transport decides what to log, retry, or reject.
//!
//! ## Matching Semantics
//!
//! The match pass is deliberately volume-blind: a tick's range is assumed to
//! fill every crossing order in full, regardless of order size or reported
//! tick volume. There are no partial fills and no price improvement: a
//! matched order trades at its own limit price for its full quantity. This
//! mirrors the platform this crate serves; it is not a continuous
//! double-auction engine.
//!
//! ## Usage
//!
//! ```rust
//! use market_matcher::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(OrderBookCatalog::new());
//! let engine = MatchingEngine::new(Arc::clone(&catalog));
//!
//! let order = Order::limit("user:1", "user", "AAPL", 10, Side::Buy, 91, "1");
//! engine
//!     .handle_order("user:1", OrderCommand::Submit(order))
//!     .expect("admit order");
//!
//! let tick = MarketData {
//!     symbol: "AAPL".to_string(),
//!     open: 100,
//!     high: 120,
//!     low: 90,
//!     close: 100,
//!     volume: 10,
//! };
//! let trades = engine.handle_market_data(&tick);
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].trade.price, 91);
//! ```

pub mod orderbook;

pub mod prelude;
mod utils;

pub use orderbook::book::LimitOrderBook;
pub use orderbook::catalog::OrderBookCatalog;
pub use orderbook::engine::{EngineRuntimeStd, EngineRuntimeTokio, MatchingEngine};
pub use orderbook::error::OrderBookError;
pub use orderbook::events::{EngineEvent, InboundEvent, OrderCommand, RejectedOrder};
pub use orderbook::order::{MarketData, Order, OrderKind, Side};
pub use orderbook::serialization::{EventSerializer, JsonEventSerializer, SerializationError};
pub use orderbook::trade::{Trade, TradeEvent, TradeListener};
pub use orderbook::tree::OrderTree;
pub use utils::current_time_millis;
