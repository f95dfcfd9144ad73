/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 2/10/25
******************************************************************************/

//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly used
//! types, traits, and functions from the market-matcher crate. Instead of
//! importing each type individually, you can use:
//!
//! ```rust
//! use market_matcher::prelude::*;
//! ```
//!
//! This will import all the essential types needed for working with the
//! order book core.

// Core order book types
pub use crate::orderbook::book::LimitOrderBook;
pub use crate::orderbook::catalog::OrderBookCatalog;
pub use crate::orderbook::error::OrderBookError;
pub use crate::orderbook::tree::OrderTree;

// Domain types
pub use crate::orderbook::order::{MarketData, Order, OrderKind, Side};

// Event dispatch types
pub use crate::orderbook::engine::{EngineRuntimeStd, EngineRuntimeTokio, MatchingEngine};
pub use crate::orderbook::events::{EngineEvent, InboundEvent, OrderCommand, RejectedOrder};

// Trade-related types
pub use crate::orderbook::trade::{Trade, TradeEvent, TradeListener};

// Event serialization types
pub use crate::orderbook::serialization::{
    EventSerializer, JsonEventSerializer, SerializationError,
};

// Utility functions
pub use crate::utils::current_time_millis;
