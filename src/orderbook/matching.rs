//! Contains the core matching engine logic for the order book.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{OrderId, Price, Quantity, Side, TimeInForce};
use super::trade::{Trade, TradeLeg};
use tracing::trace;

impl OrderBook {
    /// True if an order at `price` on `side` would match immediately against
    /// the current best opposite price. Quantity plays no part: an order that
    /// can only partially match still crosses.
    pub fn will_cross_market(&self, price: Price, side: Side) -> bool {
        match side {
            Side::Buy => self
                .asks
                .best_price()
                .is_some_and(|best_ask| price >= best_ask),
            Side::Sell => self
                .bids
                .best_price()
                .is_some_and(|best_bid| price <= best_bid),
        }
    }

    /// Run the matching loop until no cross remains, then discard any
    /// fill-and-kill remainder. Returns the trades in generation order.
    ///
    /// Each pass pairs the oldest order of the best bid level with the
    /// oldest order of the best ask level, so time priority within a price
    /// is consumed strictly in arrival order. The loop terminates because
    /// every pass strictly decreases total resting quantity.
    pub(super) fn match_orders(&mut self) -> Result<Vec<Trade>, OrderBookError> {
        let mut trades = Vec::new();

        loop {
            let (bid_price, ask_price) = match (self.bids.best_price(), self.asks.best_price()) {
                (Some(bid), Some(ask)) => (bid, ask),
                _ => break,
            };
            if bid_price < ask_price {
                break; // no cross
            }

            let (bid_id, ask_id) = match (self.best_bid_front(), self.best_ask_front()) {
                (Some(bid), Some(ask)) => (bid, ask),
                _ => break,
            };

            let quantity = match (self.get_order(bid_id), self.get_order(ask_id)) {
                (Some(bid), Some(ask)) => bid.remaining_quantity().min(ask.remaining_quantity()),
                _ => break,
            };

            self.fill_resting(bid_id, bid_price, Side::Buy, quantity)?;
            self.fill_resting(ask_id, ask_price, Side::Sell, quantity)?;
            self.last_trade_price = Some(ask_price);

            trace!(
                "Order book {}: matched bid {} against ask {} for {} at {}/{}",
                self.symbol, bid_id, ask_id, quantity, bid_price, ask_price
            );

            trades.push(Trade {
                bid: TradeLeg {
                    order_id: bid_id,
                    price: bid_price,
                    quantity,
                },
                ask: TradeLeg {
                    order_id: ask_id,
                    price: ask_price,
                    quantity,
                },
            });
        }

        self.prune_fill_and_kill();

        Ok(trades)
    }

    /// Oldest live order at the best bid level.
    fn best_bid_front(&mut self) -> Option<OrderId> {
        let OrderBook { bids, orders, .. } = self;
        bids.best_level_mut().and_then(|level| level.front(orders))
    }

    /// Oldest live order at the best ask level.
    fn best_ask_front(&mut self) -> Option<OrderId> {
        let OrderBook { asks, orders, .. } = self;
        asks.best_level_mut().and_then(|level| level.front(orders))
    }

    /// Fill the head order of `side`'s best level, removing it from its
    /// level and the store once fully filled, and the level from its side
    /// once empty.
    fn fill_resting(
        &mut self,
        order_id: OrderId,
        price: Price,
        side: Side,
        quantity: Quantity,
    ) -> Result<(), OrderBookError> {
        let Some(entry) = self.orders.get_mut(&order_id) else {
            // head ids are validated against the store just before this call
            return Ok(());
        };
        entry.order.fill(quantity)?;
        let filled = entry.order.is_filled();
        if filled {
            self.orders.remove(&order_id);
        }

        match side {
            Side::Buy => {
                if let Some(level) = self.bids.level_mut(price) {
                    level.reduce_quantity(quantity);
                    if filled {
                        level.pop_front();
                    }
                    if level.is_empty() {
                        self.bids.remove_level(price);
                    }
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.level_mut(price) {
                    level.reduce_quantity(quantity);
                    if filled {
                        level.pop_front();
                    }
                    if level.is_empty() {
                        self.asks.remove_level(price);
                    }
                }
            }
        }

        Ok(())
    }

    /// Discard an unfilled fill-and-kill remainder left at the head of
    /// either side's best level.
    ///
    /// A fill-and-kill order is only admitted when it would match
    /// immediately at the best opposite price, so a remainder can only sit
    /// at the head of its side's best level. The prune does not re-run the
    /// matching loop: a best level newly exposed by the removal is left
    /// resting, since nothing entered the book that could cross it.
    fn prune_fill_and_kill(&mut self) {
        for side in [Side::Buy, Side::Sell] {
            if let Some(order_id) = self.unfilled_fill_and_kill_at_best(side) {
                trace!(
                    "Order book {}: discarding fill-and-kill remainder {}",
                    self.symbol, order_id
                );
                self.remove_resting_order(order_id);
            }
        }
    }

    fn unfilled_fill_and_kill_at_best(&mut self, side: Side) -> Option<OrderId> {
        let order_id = match side {
            Side::Buy => self.best_bid_front(),
            Side::Sell => self.best_ask_front(),
        }?;
        let entry = self.orders.get(&order_id)?;
        let unfilled_remainder = entry.order.time_in_force() == TimeInForce::FillAndKill
            && !entry.order.is_filled();
        unfilled_remainder.then_some(order_id)
    }
}
