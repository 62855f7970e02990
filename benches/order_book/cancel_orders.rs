use criterion::Criterion;
use matchbook::{OrderBook, Side, TimeInForce};
use std::hint::black_box;

/// Register all benchmarks for cancelling orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel Orders");

    // Cancel from the middle of a deep single level (tombstone path)
    group.bench_function("cancel_mid_level", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = order_book.add_limit_order(
                    i,
                    1000,
                    10,
                    Side::Buy,
                    TimeInForce::GoodTillCancel,
                );
            }
            for i in (1..100u64).step_by(2) {
                let _ = black_box(order_book.cancel_order(i));
            }
        })
    });

    // Cancel orders spread across many levels
    group.bench_function("cancel_across_levels", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = order_book.add_limit_order(
                    i,
                    1000 + i as i32,
                    10,
                    Side::Sell,
                    TimeInForce::GoodTillCancel,
                );
            }
            for i in 0..100u64 {
                let _ = black_box(order_book.cancel_order(i));
            }
        })
    });

    // Cancelling ids that are not resting must stay cheap
    group.bench_function("cancel_unknown_ids", |b| {
        let mut order_book = OrderBook::new("TEST-SYMBOL");
        let _ = order_book.add_limit_order(0, 1000, 10, Side::Buy, TimeInForce::GoodTillCancel);
        b.iter(|| {
            for i in 1..100u64 {
                let _ = black_box(order_book.cancel_order(i));
            }
        })
    });

    group.finish();
}
