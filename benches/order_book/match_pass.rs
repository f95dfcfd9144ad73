use criterion::{BenchmarkId, Criterion};
use market_matcher::{LimitOrderBook, MarketData, Order, Side};
use std::hint::black_box;

fn populated_book(order_count: u128) -> LimitOrderBook {
    let book = LimitOrderBook::new("BENCH");
    // Half bids below 1000, half asks above, spread across price levels.
    for i in 0..order_count {
        let (side, price) = if i % 2 == 0 {
            (Side::Buy, 900 + (i % 100))
        } else {
            (Side::Sell, 1100 + (i % 100))
        };
        let order = Order::limit(&format!("order-{i}"), "user", "BENCH", 10, side, price, "1");
        let _ = book.add_order(order);
    }
    book
}

/// Register all benchmarks for the market-data match pass.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("LimitOrderBook - Match Pass");

    for &order_count in &[100u128, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("match_full_range", order_count),
            &order_count,
            |b, &count| {
                let tick = MarketData {
                    symbol: "BENCH".to_string(),
                    open: 1000,
                    high: 1300,
                    low: 800,
                    close: 1000,
                    volume: 10,
                };
                b.iter_with_setup(
                    || populated_book(count),
                    |book| {
                        let trades = black_box(book.match_orders_to_trade(&tick));
                        assert_eq!(trades.len(), count as usize);
                    },
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("match_nothing", order_count),
            &order_count,
            |b, &count| {
                // A range inside the spread crosses no resting order.
                let tick = MarketData {
                    symbol: "BENCH".to_string(),
                    open: 1000,
                    high: 1050,
                    low: 1000,
                    close: 1000,
                    volume: 10,
                };
                let book = populated_book(count);
                b.iter(|| {
                    let trades = black_box(book.match_orders_to_trade(&tick));
                    assert!(trades.is_empty());
                });
            },
        );
    }

    group.finish();
}
