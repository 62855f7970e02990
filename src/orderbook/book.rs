//! Core OrderBook implementation for managing price levels and orders

use super::level::PriceLevel;
use super::order::{Order, OrderId, Price, Side};
use super::side::{AscendingPrice, BookSide, DescendingPrice};
use super::snapshot::{LevelInfo, OrderBookSnapshot};
use crate::utils::current_time_millis;
use std::collections::HashMap;
use tracing::trace;

/// Store entry: the order itself plus the arrival sequence it was admitted
/// under. The sequence ties the order to its queue slot in the price level.
#[derive(Debug)]
pub(super) struct OrderEntry {
    pub(super) order: Order,
    pub(super) seq: u64,
}

/// The OrderBook manages the bid and ask sides of one instrument and matches
/// crossing orders into trades.
///
/// The order store is the single owner of every live order; the two sides
/// hold price levels of identity keys, so an order is locatable in O(1)
/// through its store entry. An id is present in the store if and only if the
/// order rests in exactly one level — removal from both is atomic with
/// respect to anything a caller can observe.
///
/// All mutating operations take `&mut self` and run to completion before
/// returning. Embedding the book in a multi-threaded host requires one
/// external lock around the whole instance; no operation is safe to
/// interleave with another against the same book.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels (buy orders), highest price first
    pub(super) bids: BookSide<DescendingPrice>,

    /// Ask side price levels (sell orders), lowest price first
    pub(super) asks: BookSide<AscendingPrice>,

    /// Authoritative store of live orders, keyed by order id
    pub(super) orders: HashMap<OrderId, OrderEntry>,

    /// Arrival sequence for the next admitted order
    pub(super) next_seq: u64,

    /// Ask-leg price of the most recent match
    pub(super) last_trade_price: Option<Price>,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(),
            asks: BookSide::new(),
            orders: HashMap::new(),
            next_seq: 0,
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Count of currently-resting orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True if no orders are resting on either side.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the best bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((f64::from(bid) + f64::from(ask)) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Ask-leg price of the most recent match, if any trade has occurred.
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Get a resting order by id.
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id).map(|entry| &entry.order)
    }

    /// All orders resting at a specific price level, in time priority.
    pub fn get_orders_at_price(&self, price: Price, side: Side) -> Vec<&Order> {
        trace!(
            "Order book {}: getting orders at price {} for side {}",
            self.symbol, price, side
        );
        let level = match side {
            Side::Buy => self.bids.level(price),
            Side::Sell => self.asks.level(price),
        };

        match level {
            Some(level) => level.iter_orders(&self.orders).collect(),
            None => Vec::new(),
        }
    }

    /// All resting orders: bids first, each side from best price outwards,
    /// time priority within a level.
    pub fn get_all_orders(&self) -> Vec<&Order> {
        trace!("Order book {}: getting all orders", self.symbol);
        let mut result = Vec::with_capacity(self.orders.len());

        for level in self.bids.iter() {
            result.extend(level.iter_orders(&self.orders));
        }
        for level in self.asks.iter() {
            result.extend(level.iter_orders(&self.orders));
        }

        result
    }

    /// Aggregated (price, total remaining quantity) view of every level,
    /// bids descending and asks ascending. Pure query over a consistent
    /// point-in-time state of both sides.
    pub fn level_infos(&self) -> OrderBookSnapshot {
        self.snapshot_levels(usize::MAX)
    }

    /// Create a snapshot of the current order book state, truncated to the
    /// top `depth` levels per side.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        self.snapshot_levels(depth)
    }

    fn snapshot_levels(&self, depth: usize) -> OrderBookSnapshot {
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: collect_levels(self.bids.iter(), depth),
            asks: collect_levels(self.asks.iter(), depth),
        }
    }
}

fn collect_levels<'a>(
    levels: impl Iterator<Item = &'a PriceLevel>,
    depth: usize,
) -> Vec<LevelInfo> {
    levels
        .take(depth)
        .map(|level| LevelInfo {
            price: level.price(),
            quantity: level.total_quantity(),
        })
        .collect()
}
