//! Event dispatch over the catalog, with channel-driven runtimes.
//!
//! [`MatchingEngine`] is the synchronous core: one dispatch function per
//! inbound event kind, no I/O, no blocking. The runtime types wrap it in a
//! consume-and-emit loop, with implementations for both standard library
//! (`EngineRuntimeStd`) and Tokio (`EngineRuntimeTokio`) channels.

use std::sync::Arc;

use tracing::{error, info};

use crate::orderbook::catalog::OrderBookCatalog;
use crate::orderbook::error::OrderBookError;
use crate::orderbook::events::{EngineEvent, InboundEvent, OrderCommand, RejectedOrder};
use crate::orderbook::order::MarketData;
use crate::orderbook::trade::TradeEvent;

/// Routes inbound events to the right book and turns core errors into
/// observable failures.
///
/// The engine owns nothing but a handle to the shared catalog; it is cheap
/// to clone behind an `Arc` and safe to call from concurrent consumers.
pub struct MatchingEngine {
    catalog: Arc<OrderBookCatalog>,
}

impl MatchingEngine {
    /// Create an engine over a shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<OrderBookCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine dispatches into.
    #[must_use]
    pub fn catalog(&self) -> &Arc<OrderBookCatalog> {
        &self.catalog
    }

    /// Apply one order instruction.
    ///
    /// `Submit` creates the symbol's book lazily; `Cancel` and `Replace`
    /// only look books up and fail on symbols that never traded.
    ///
    /// # Errors
    /// Propagates the book's typed errors ([`OrderBookError::OrderNotFound`],
    /// [`OrderBookError::DuplicateOrderId`], ...), plus
    /// [`OrderBookError::UnknownSymbol`] when a cancel or replace references
    /// a symbol with no book. The caller decides whether an error becomes a
    /// rejection event.
    pub fn handle_order(&self, key: &str, command: OrderCommand) -> Result<(), OrderBookError> {
        let result = match command {
            OrderCommand::Submit(order) => {
                let book = self.catalog.get_or_create(&order.symbol);
                book.add_order(order)
            }
            OrderCommand::Cancel { symbol, id } => match self.catalog.get_book(&symbol) {
                Some(book) => book.remove_order(&id).map(|_| ()),
                None => Err(OrderBookError::UnknownSymbol(symbol)),
            },
            OrderCommand::Replace { symbol, id, order } => match self.catalog.get_book(&symbol) {
                Some(book) => book.replace_order(&id, order).map(|_| ()),
                None => Err(OrderBookError::UnknownSymbol(symbol)),
            },
        };
        if let Err(e) = &result {
            info!("order instruction {} refused: {}", key, e);
        }
        result
    }

    /// Apply one market-data tick.
    ///
    /// A symbol with no book is a no-op: no book, no resting orders,
    /// nothing to match. Otherwise runs the match pass and wraps each fill
    /// in a [`TradeEvent`] keyed by the matched order's id.
    #[must_use]
    pub fn handle_market_data(&self, market_data: &MarketData) -> Vec<TradeEvent> {
        let Some(book) = self.catalog.get_book(&market_data.symbol) else {
            return Vec::new();
        };
        book.match_orders_to_trade(market_data)
            .into_iter()
            .map(|(id, trade)| TradeEvent::new(id, trade))
            .collect()
    }

    /// Dispatch one inbound event and collect everything it emits.
    ///
    /// Order errors become [`EngineEvent::Rejected`] here, the single place
    /// rejections are constructed; the core below only returns typed
    /// errors.
    #[must_use]
    pub fn process(&self, event: InboundEvent) -> Vec<EngineEvent> {
        match event {
            InboundEvent::Order { key, command } => {
                let order = match &command {
                    OrderCommand::Submit(order) | OrderCommand::Replace { order, .. } => {
                        Some(order.clone())
                    }
                    OrderCommand::Cancel { .. } => None,
                };
                match self.handle_order(&key, command) {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![EngineEvent::Rejected(RejectedOrder {
                        key,
                        order,
                        reason: e.to_string(),
                    })],
                }
            }
            InboundEvent::MarketData(market_data) => self
                .handle_market_data(&market_data)
                .into_iter()
                .map(EngineEvent::Trade)
                .collect(),
        }
    }
}

/// Engine runtime using standard library mpsc channels.
pub struct EngineRuntimeStd {
    /// The engine every consumed event is dispatched through.
    engine: Arc<MatchingEngine>,
    /// Sender side of the inbound channel, cloned out to producers.
    input_sender: std::sync::mpsc::Sender<InboundEvent>,
    /// Receiver for inbound events (taken when the runtime starts).
    input_receiver: Option<std::sync::mpsc::Receiver<InboundEvent>>,
    /// Sender for outbound events.
    event_sender: std::sync::mpsc::Sender<EngineEvent>,
}

impl EngineRuntimeStd {
    /// Create a runtime around an engine, returning it together with the
    /// receiver the transport layer drains outbound events from.
    #[must_use]
    pub fn new(engine: Arc<MatchingEngine>) -> (Self, std::sync::mpsc::Receiver<EngineEvent>) {
        let (input_sender, input_receiver) = std::sync::mpsc::channel();
        let (event_sender, event_receiver) = std::sync::mpsc::channel();

        (
            Self {
                engine,
                input_sender,
                input_receiver: Some(input_receiver),
                event_sender,
            },
            event_receiver,
        )
    }

    /// A sender producers push inbound events into.
    #[must_use]
    pub fn input_sender(&self) -> std::sync::mpsc::Sender<InboundEvent> {
        self.input_sender.clone()
    }

    /// Start the dispatch loop in a separate thread.
    ///
    /// The loop ends when every input sender is dropped, or when the
    /// outbound receiver goes away.
    pub fn start(&mut self) -> std::thread::JoinHandle<()> {
        let receiver = self
            .input_receiver
            .take()
            .expect("engine runtime already started");
        let engine = Arc::clone(&self.engine);
        let event_sender = self.event_sender.clone();

        std::thread::spawn(move || {
            info!("matching engine runtime started");

            while let Ok(inbound) = receiver.recv() {
                for outbound in engine.process(inbound) {
                    if let Err(e) = event_sender.send(outbound) {
                        error!("failed to emit engine event: {}", e);
                        return;
                    }
                }
            }

            info!("matching engine runtime stopped");
        })
    }
}

/// Engine runtime using Tokio mpsc channels.
pub struct EngineRuntimeTokio {
    /// The engine every consumed event is dispatched through.
    engine: Arc<MatchingEngine>,
    /// Sender side of the inbound channel, cloned out to producers.
    input_sender: tokio::sync::mpsc::UnboundedSender<InboundEvent>,
    /// Receiver for inbound events (taken when the runtime starts).
    input_receiver: Option<tokio::sync::mpsc::UnboundedReceiver<InboundEvent>>,
    /// Sender for outbound events.
    event_sender: tokio::sync::mpsc::UnboundedSender<EngineEvent>,
}

impl EngineRuntimeTokio {
    /// Create a runtime around an engine, returning it together with the
    /// receiver the transport layer drains outbound events from.
    #[must_use]
    pub fn new(
        engine: Arc<MatchingEngine>,
    ) -> (Self, tokio::sync::mpsc::UnboundedReceiver<EngineEvent>) {
        let (input_sender, input_receiver) = tokio::sync::mpsc::unbounded_channel();
        let (event_sender, event_receiver) = tokio::sync::mpsc::unbounded_channel();

        (
            Self {
                engine,
                input_sender,
                input_receiver: Some(input_receiver),
                event_sender,
            },
            event_receiver,
        )
    }

    /// A sender producers push inbound events into.
    #[must_use]
    pub fn input_sender(&self) -> tokio::sync::mpsc::UnboundedSender<InboundEvent> {
        self.input_sender.clone()
    }

    /// Start the dispatch loop as an async task.
    ///
    /// Returns a JoinHandle for the spawned task.
    pub fn start(&mut self) -> tokio::task::JoinHandle<()> {
        let mut receiver = self
            .input_receiver
            .take()
            .expect("engine runtime already started");
        let engine = Arc::clone(&self.engine);
        let event_sender = self.event_sender.clone();

        tokio::spawn(async move {
            info!("matching engine runtime started (Tokio)");

            while let Some(inbound) = receiver.recv().await {
                for outbound in engine.process(inbound) {
                    if let Err(e) = event_sender.send(outbound) {
                        error!("failed to emit engine event: {}", e);
                        return;
                    }
                }
            }

            info!("matching engine runtime stopped (Tokio)");
        })
    }
}
