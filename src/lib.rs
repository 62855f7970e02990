//! # Single-Instrument Limit Order Book Matching Engine
//!
//! A limit order book implementation written in Rust. This crate provides a
//! complete matching engine for one instrument: it accepts buy and sell order
//! intents, keeps them ordered by price and arrival time, continuously matches
//! crossing orders into trades, and supports cancellation, modification and
//! aggregated level snapshots.
//!
//! ## Key Features
//!
//! - **Price-Time Priority**: Better prices always match first; among equal
//!   prices, earlier-submitted orders match first. Each side of the book is an
//!   ordered map under an explicit, named ordering policy (bids descending,
//!   asks ascending), so the best price is always the first entry.
//!
//! - **O(1) Cancellation**: A single authoritative store owns every live
//!   order; price levels hold only identity keys. Cancelling by id is
//!   constant time amortized, without disturbing the time priority of the
//!   remaining orders at the level.
//!
//! - **Duration Policies**: Good-till-cancel orders rest until filled or
//!   cancelled; fill-and-kill orders must match immediately on entry and any
//!   unfilled remainder is discarded rather than left resting.
//!
//! - **Accurate Trade Reporting**: Every call that can match returns the full
//!   list of trades it generated, each trade pairing a bid leg and an ask leg
//!   at their own resting prices.
//!
//! - **L2 Snapshots**: Aggregated (price, total quantity) views per level,
//!   full depth or truncated, serializable with `serde`.
//!
//! ## Concurrency
//!
//! The engine is deliberately single-threaded and synchronous: every mutating
//! operation takes `&mut self` and runs to completion before returning. All
//! cross-structure invariants hold at call boundaries, never mid-call, so a
//! multi-threaded host must wrap the whole book instance in one lock.
//!
//! ## Example
//!
//! ```
//! use matchbook::{OrderBook, Side, TimeInForce};
//!
//! let mut book = OrderBook::new("BTC-USD");
//! book.add_limit_order(1, 10_000, 5, Side::Buy, TimeInForce::GoodTillCancel).unwrap();
//! book.add_limit_order(2, 10_010, 5, Side::Sell, TimeInForce::GoodTillCancel).unwrap();
//!
//! // Crosses the resting ask at 10_010 and trades 3 of its 5 units.
//! let trades = book.add_limit_order(3, 10_010, 3, Side::Buy, TimeInForce::GoodTillCancel).unwrap();
//! assert_eq!(trades.len(), 1);
//! assert_eq!(book.len(), 2);
//! ```
//!
//! ## Status
//! This crate models the matching core only: no persistence, no wire
//! protocol, no multi-instrument routing.

pub mod orderbook;

mod utils;

pub use orderbook::{
    LevelInfo, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, Price, PriceLevel,
    Quantity, Side, TimeInForce, Trade, TradeLeg,
};
pub use utils::current_time_millis;
