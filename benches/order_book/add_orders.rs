use criterion::{BenchmarkId, Criterion};
use matchbook::{OrderBook, Side, TimeInForce};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Benchmark adding resting limit orders across distinct price levels
    group.bench_function("add_limit_orders", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(order_book.add_limit_order(
                    i,
                    1000 + i as i32,
                    10,
                    Side::Buy,
                    TimeInForce::GoodTillCancel,
                ));
            }
        })
    });

    // Benchmark stacking orders onto a single price level
    group.bench_function("add_orders_single_level", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(order_book.add_limit_order(
                    i,
                    1000,
                    10,
                    Side::Sell,
                    TimeInForce::GoodTillCancel,
                ));
            }
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10u64, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut order_book = OrderBook::new("TEST-SYMBOL");
                    for i in 0..order_count {
                        let _ = black_box(order_book.add_limit_order(
                            i,
                            1000 + (i % 50) as i32,
                            10,
                            Side::Buy,
                            TimeInForce::GoodTillCancel,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
