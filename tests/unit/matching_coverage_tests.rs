//! Matching behavior coverage through the public API.

use matchbook::{OrderBook, Side, TimeInForce, Trade};
use std::collections::HashMap;

fn add_gtc(book: &mut OrderBook, id: u64, price: i32, quantity: u32, side: Side) -> Vec<Trade> {
    book.add_limit_order(id, price, quantity, side, TimeInForce::GoodTillCancel)
        .unwrap()
}

#[test]
fn test_partial_cross_leaves_remainder_resting() {
    let mut book = OrderBook::new("SCENARIO");

    let trades = add_gtc(&mut book, 1, 100, 100, Side::Buy);
    assert!(trades.is_empty());
    assert_eq!(book.len(), 1);

    let trades = add_gtc(&mut book, 2, 101, 100, Side::Sell);
    assert!(trades.is_empty());
    assert_eq!(book.len(), 2);

    let trades = add_gtc(&mut book, 3, 101, 50, Side::Buy);
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.order_id, 3);
    assert_eq!(trades[0].bid.price, 101);
    assert_eq!(trades[0].ask.order_id, 2);
    assert_eq!(trades[0].ask.price, 101);
    assert_eq!(trades[0].quantity(), 50);

    assert_eq!(book.get_order(2).unwrap().remaining_quantity(), 50);
    assert!(book.get_order(3).is_none());
    assert_eq!(book.len(), 2);
}

#[test]
fn test_aggressor_sweeps_the_whole_opposite_side() {
    let mut book = OrderBook::new("SWEEP");
    add_gtc(&mut book, 1, 100, 10, Side::Sell);
    add_gtc(&mut book, 2, 101, 10, Side::Sell);
    add_gtc(&mut book, 3, 101, 10, Side::Sell);
    add_gtc(&mut book, 4, 102, 10, Side::Sell);

    let trades = add_gtc(&mut book, 5, 110, 45, Side::Buy);

    // best price first, FIFO within a price
    let ask_ids: Vec<_> = trades.iter().map(|trade| trade.ask.order_id).collect();
    assert_eq!(ask_ids, vec![1, 2, 3, 4]);

    // ask side exhausted; the aggressor's remainder rests as the only bid
    assert_eq!(book.best_ask(), None);
    assert_eq!(book.best_bid(), Some(110));
    assert_eq!(book.get_order(5).unwrap().remaining_quantity(), 5);
}

#[test]
fn test_quantity_is_conserved_across_a_session() {
    let mut book = OrderBook::new("CONSERVE");
    let mut submitted: HashMap<u64, u32> = HashMap::new();
    let mut filled: HashMap<u64, u32> = HashMap::new();
    let mut all_trades = Vec::new();

    let script: &[(u64, i32, u32, Side)] = &[
        (1, 100, 30, Side::Buy),
        (2, 99, 20, Side::Buy),
        (3, 101, 25, Side::Sell),
        (4, 99, 40, Side::Sell), // crosses both bid levels
        (5, 102, 10, Side::Buy), // crosses the resting asks
        (6, 98, 15, Side::Buy),
    ];

    for &(id, price, quantity, side) in script {
        submitted.insert(id, quantity);
        let trades = add_gtc(&mut book, id, price, quantity, side);
        all_trades.extend(trades);
    }

    for trade in &all_trades {
        // both legs always exchange the same quantity
        assert_eq!(trade.bid.quantity, trade.ask.quantity);
        *filled.entry(trade.bid.order_id).or_default() += trade.bid.quantity;
        *filled.entry(trade.ask.order_id).or_default() += trade.ask.quantity;
    }

    // per order: filled + still resting == submitted
    for (&id, &quantity) in &submitted {
        let resting = book
            .get_order(id)
            .map(|order| order.remaining_quantity())
            .unwrap_or(0);
        let filled = filled.get(&id).copied().unwrap_or(0);
        assert_eq!(
            filled + resting,
            quantity,
            "order {} leaked quantity",
            id
        );
    }

    // and the two sides of the tape balance
    let bid_total: u64 = all_trades.iter().map(|t| u64::from(t.bid.quantity)).sum();
    let ask_total: u64 = all_trades.iter().map(|t| u64::from(t.ask.quantity)).sum();
    assert_eq!(bid_total, ask_total);
}

#[test]
fn test_each_match_respects_both_limits() {
    let mut book = OrderBook::new("LIMITS");
    add_gtc(&mut book, 1, 100, 10, Side::Buy);
    add_gtc(&mut book, 2, 95, 10, Side::Buy);

    let trades = add_gtc(&mut book, 3, 97, 30, Side::Sell);

    // only the 100 bid is at or above the sell limit of 97
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].bid.order_id, 1);
    assert!(trades[0].bid.price >= trades[0].ask.price);

    // remainder rests at 97, above the untouched 95 bid
    assert_eq!(book.best_ask(), Some(97));
    assert_eq!(book.best_bid(), Some(95));
}

#[test]
fn test_fill_and_kill_sweeps_multiple_levels_before_prune() {
    let mut book = OrderBook::new("FAK");
    add_gtc(&mut book, 1, 100, 10, Side::Sell);
    add_gtc(&mut book, 2, 101, 10, Side::Sell);
    add_gtc(&mut book, 3, 103, 10, Side::Sell);

    // buys up to 101: takes levels 100 and 101 in full, then dies
    let trades = book
        .add_limit_order(4, 101, 50, Side::Buy, TimeInForce::FillAndKill)
        .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].ask.price, 100);
    assert_eq!(trades[1].ask.price, 101);
    assert!(book.get_order(4).is_none());

    // the 103 ask is left resting and the book is uncrossed
    assert_eq!(book.best_ask(), Some(103));
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.len(), 1);
}

#[test]
fn test_modify_chain_keeps_matching_correct() {
    let mut book = OrderBook::new("MODIFY");
    add_gtc(&mut book, 1, 100, 10, Side::Buy);
    add_gtc(&mut book, 2, 105, 10, Side::Sell);

    // walk the bid up until it crosses
    book.modify_order(1, Side::Buy, 102, 10).unwrap();
    assert_eq!(book.best_bid(), Some(102));

    let trades = book.modify_order(1, Side::Buy, 105, 10).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].quantity(), 10);
    assert!(book.is_empty());
}
