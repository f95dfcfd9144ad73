use criterion::Criterion;
use market_matcher::{LimitOrderBook, Order, Side};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("LimitOrderBook - Add Orders");

    group.bench_function("add_limit_orders", |b| {
        b.iter(|| {
            let book = LimitOrderBook::new("BENCH");
            for i in 0..100u128 {
                let order = Order::limit(
                    &format!("order-{i}"),
                    "user",
                    "BENCH",
                    10,
                    Side::Buy,
                    1000 + i,
                    "1",
                );
                let _ = black_box(book.add_order(order));
            }
        })
    });

    group.bench_function("add_then_cancel", |b| {
        b.iter(|| {
            let book = LimitOrderBook::new("BENCH");
            for i in 0..100u128 {
                let id = format!("order-{i}");
                let order = Order::limit(&id, "user", "BENCH", 10, Side::Sell, 1000 + i, "1");
                let _ = book.add_order(order);
                let _ = black_box(book.remove_order(&id));
            }
        })
    });

    group.finish();
}
