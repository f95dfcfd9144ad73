use market_matcher::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn engine() -> Arc<MatchingEngine> {
    Arc::new(MatchingEngine::new(Arc::new(OrderBookCatalog::new())))
}

fn order(id: &str, quantity: u64, side: Side, price: u128) -> Order {
    Order::limit(id, "user", "AAPL", quantity, side, price, "1")
}

fn tick() -> MarketData {
    MarketData {
        symbol: "AAPL".to_string(),
        open: 100,
        high: 120,
        low: 90,
        close: 100,
        volume: 10,
    }
}

#[test]
fn test_std_runtime_emits_trades() {
    let (mut runtime, events) = EngineRuntimeStd::new(engine());
    let input = runtime.input_sender();
    let handle = runtime.start();

    input
        .send(InboundEvent::Order {
            key: "user:1".to_string(),
            command: OrderCommand::Submit(order("user:1", 10, Side::Buy, 91)),
        })
        .expect("send order");
    input
        .send(InboundEvent::MarketData(tick()))
        .expect("send tick");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("trade event");
    match event {
        EngineEvent::Trade(trade_event) => {
            assert_eq!(trade_event.key, "user:1");
            assert_eq!(trade_event.trade.price, 91);
            assert_eq!(trade_event.trade.quantity, 10);
        }
        EngineEvent::Rejected(rejected) => panic!("unexpected rejection: {}", rejected.reason),
    }

    // The runtime keeps a sender of its own; both must go for the loop to end.
    drop(input);
    drop(runtime);
    handle.join().expect("runtime stopped cleanly");
}

#[test]
fn test_std_runtime_emits_rejections() {
    let (mut runtime, events) = EngineRuntimeStd::new(engine());
    let input = runtime.input_sender();
    let handle = runtime.start();

    input
        .send(InboundEvent::Order {
            key: "user:9".to_string(),
            command: OrderCommand::Cancel {
                symbol: "MSFT".to_string(),
                id: "user:9".to_string(),
            },
        })
        .expect("send cancel");

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("rejection event");
    match event {
        EngineEvent::Rejected(rejected) => {
            assert_eq!(rejected.key, "user:9");
            assert_eq!(rejected.reason, "unknown symbol: MSFT");
            assert!(rejected.order.is_none());
        }
        EngineEvent::Trade(_) => panic!("expected a rejection"),
    }

    drop(input);
    drop(runtime);
    handle.join().expect("runtime stopped cleanly");
}

#[tokio::test]
async fn test_tokio_runtime_round_trip() {
    let (mut runtime, mut events) = EngineRuntimeTokio::new(engine());
    let input = runtime.input_sender();
    let handle = runtime.start();

    input
        .send(InboundEvent::Order {
            key: "user:1".to_string(),
            command: OrderCommand::Submit(order("user:1", 5, Side::Sell, 119)),
        })
        .expect("send order");
    input
        .send(InboundEvent::MarketData(tick()))
        .expect("send tick");

    let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("event before timeout")
        .expect("channel open");
    match event {
        EngineEvent::Trade(trade_event) => {
            assert_eq!(trade_event.key, "user:1");
            assert_eq!(trade_event.trade.price, 119);
        }
        EngineEvent::Rejected(rejected) => panic!("unexpected rejection: {}", rejected.reason),
    }

    drop(input);
    drop(runtime);
    handle.await.expect("runtime stopped cleanly");
}

#[test]
fn test_serialized_events_cross_the_wire_intact() {
    let serializer = JsonEventSerializer::new();
    let engine = engine();
    engine
        .handle_order(
            "user:1",
            OrderCommand::Submit(order("user:1", 10, Side::Buy, 91)),
        )
        .expect("admit order");

    let events = engine.process(InboundEvent::MarketData(tick()));
    assert_eq!(events.len(), 1);

    let bytes = serializer.serialize_event(&events[0]).expect("serialize");
    match serializer.deserialize_event(&bytes).expect("deserialize") {
        EngineEvent::Trade(trade_event) => assert_eq!(trade_event.trade.order.owner, "user"),
        EngineEvent::Rejected(_) => panic!("expected a trade event"),
    }
}
