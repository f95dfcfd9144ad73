use market_matcher::prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const LOW: u128 = 90;
    const HIGH: u128 = 120;
    const SYMBOL: &str = "AAPL";

    fn engine() -> MatchingEngine {
        MatchingEngine::new(Arc::new(OrderBookCatalog::new()))
    }

    fn order(id: &str, quantity: u64, side: Side, price: u128) -> Order {
        Order::limit(id, "user", SYMBOL, quantity, side, price, "1")
    }

    fn tick() -> MarketData {
        MarketData {
            symbol: SYMBOL.to_string(),
            open: 100,
            high: HIGH,
            low: LOW,
            close: 100,
            volume: 10,
        }
    }

    #[test]
    fn test_add_order_creates_book() {
        let engine = engine();
        assert!(engine.catalog().get_book(SYMBOL).is_none());

        engine
            .handle_order(
                "user:1",
                OrderCommand::Submit(order("user:1", 10, Side::Buy, 80)),
            )
            .expect("admit order");

        let book = engine.catalog().get_book(SYMBOL).expect("book exists");
        assert_eq!(book.buy_orders().len(), 1);
        assert_eq!(book.sell_orders().len(), 0);
    }

    #[test]
    fn test_buy_order_crossing_the_low_fills_in_full() {
        // Scenario A: buy at 91, tick low 90 -> trade at 91 for the full
        // quantity, buy side empty afterwards.
        let engine = engine();
        engine
            .handle_order(
                "user:1",
                OrderCommand::Submit(order("user:1", 10, Side::Buy, LOW + 1)),
            )
            .expect("admit order");

        let trades = engine.handle_market_data(&tick());
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].key, "user:1");
        assert_eq!(trades[0].trade.price, LOW + 1);
        assert_eq!(trades[0].trade.quantity, 10);
        assert_eq!(trades[0].trade.order.id, "user:1");

        let book = engine.catalog().get_book(SYMBOL).expect("book exists");
        assert!(book.buy_orders().is_empty());
        assert!(book.sell_orders().is_empty());
    }

    #[test]
    fn test_buy_order_below_the_low_keeps_resting() {
        // Scenario B: buy at 89, tick low 90 -> no match.
        let engine = engine();
        engine
            .handle_order(
                "user:1",
                OrderCommand::Submit(order("user:1", 10, Side::Buy, LOW - 1)),
            )
            .expect("admit order");

        assert!(engine.handle_market_data(&tick()).is_empty());

        let book = engine.catalog().get_book(SYMBOL).expect("book exists");
        assert_eq!(book.buy_orders().len(), 1);
    }

    #[test]
    fn test_sell_order_under_the_high_fills_in_full() {
        // Scenario C: sell at 119, tick high 120 -> trade at 119.
        let engine = engine();
        engine
            .handle_order(
                "user:1",
                OrderCommand::Submit(order("user:1", 10, Side::Sell, HIGH - 1)),
            )
            .expect("admit order");

        let trades = engine.handle_market_data(&tick());
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].trade.price, HIGH - 1);

        let book = engine.catalog().get_book(SYMBOL).expect("book exists");
        assert!(book.sell_orders().is_empty());
    }

    #[test]
    fn test_sell_order_above_the_high_keeps_resting() {
        // Scenario D: sell at 121, tick high 120 -> no match.
        let engine = engine();
        engine
            .handle_order(
                "user:1",
                OrderCommand::Submit(order("user:1", 10, Side::Sell, HIGH + 1)),
            )
            .expect("admit order");

        assert!(engine.handle_market_data(&tick()).is_empty());

        let book = engine.catalog().get_book(SYMBOL).expect("book exists");
        assert_eq!(book.sell_orders().len(), 1);
    }

    #[test]
    fn test_concurrent_adds_for_distinct_ids_both_survive() {
        let engine = Arc::new(engine());

        let handles: Vec<_> = [("user:1", 91u128), ("user:2", 89u128)]
            .into_iter()
            .map(|(id, price)| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    engine
                        .handle_order(id, OrderCommand::Submit(order(id, 10, Side::Buy, price)))
                        .expect("admit order");
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread finished");
        }

        let book = engine.catalog().get_book(SYMBOL).expect("book exists");
        let buys = book.buy_orders();
        assert_eq!(buys.len(), 2);
        assert_eq!(buys["user:1"].price, 91);
        assert_eq!(buys["user:2"].price, 89);
    }

    #[test]
    fn test_catalog_clear_resets_between_scenarios() {
        let engine = engine();
        engine
            .handle_order(
                "user:1",
                OrderCommand::Submit(order("user:1", 10, Side::Buy, 80)),
            )
            .expect("admit order");

        engine.catalog().clear();
        assert!(engine.catalog().get_book(SYMBOL).is_none());
        assert!(engine.handle_market_data(&tick()).is_empty());
    }
}
