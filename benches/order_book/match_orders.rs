use criterion::{BenchmarkId, Criterion};
use matchbook::{OrderBook, Side, TimeInForce};
use std::hint::black_box;

fn build_ask_ladder(levels: u64, orders_per_level: u64) -> OrderBook {
    let mut order_book = OrderBook::new("TEST-SYMBOL");
    let mut id = 0u64;
    for level in 0..levels {
        for _ in 0..orders_per_level {
            let _ = order_book.add_limit_order(
                id,
                1000 + level as i32,
                10,
                Side::Sell,
                TimeInForce::GoodTillCancel,
            );
            id += 1;
        }
    }
    order_book
}

/// Register all benchmarks for matching orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // A single aggressive order consuming one resting order
    group.bench_function("match_single_order", |b| {
        b.iter(|| {
            let mut order_book = build_ask_ladder(1, 1);
            let _ = black_box(order_book.add_limit_order(
                10_000,
                1000,
                10,
                Side::Buy,
                TimeInForce::GoodTillCancel,
            ));
        })
    });

    // One aggressive order sweeping a ladder of price levels
    for levels in [5u64, 20, 50].iter() {
        group.bench_with_input(
            BenchmarkId::new("sweep_levels", levels),
            levels,
            |b, &levels| {
                b.iter(|| {
                    let mut order_book = build_ask_ladder(levels, 4);
                    let _ = black_box(order_book.add_limit_order(
                        10_000,
                        1000 + levels as i32,
                        levels as u32 * 40,
                        Side::Buy,
                        TimeInForce::GoodTillCancel,
                    ));
                })
            },
        );
    }

    // Fill-and-kill against a partially covering book
    group.bench_function("fill_and_kill_partial", |b| {
        b.iter(|| {
            let mut order_book = build_ask_ladder(3, 4);
            let _ = black_box(order_book.add_limit_order(
                10_000,
                1001,
                1_000,
                Side::Buy,
                TimeInForce::FillAndKill,
            ));
        })
    });

    group.finish();
}
