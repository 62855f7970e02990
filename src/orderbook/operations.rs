//! Order book operations for admitting new orders.

use super::book::{OrderBook, OrderEntry};
use super::error::OrderBookError;
use super::order::{Order, OrderId, Price, Quantity, Side, TimeInForce};
use super::trade::Trade;
use tracing::trace;

impl OrderBook {
    /// Add a new order to the book and run the matching loop. Ownership of
    /// the order transfers to the engine if it is accepted.
    ///
    /// Soft rejections return an empty trade list rather than an error: an
    /// id that is already resting, or a fill-and-kill order the book cannot
    /// cross against. A rejected order is never inserted and never counts
    /// toward [`OrderBook::len`].
    pub fn add_order(&mut self, order: Order) -> Result<Vec<Trade>, OrderBookError> {
        if self.orders.contains_key(&order.id()) {
            trace!(
                "Order book {}: rejecting duplicate order id {}",
                self.symbol,
                order.id()
            );
            return Ok(Vec::new());
        }

        if order.time_in_force() == TimeInForce::FillAndKill
            && !self.will_cross_market(order.price(), order.side())
        {
            trace!(
                "Order book {}: rejecting unmatchable fill-and-kill order {}",
                self.symbol,
                order.id()
            );
            return Ok(Vec::new());
        }

        trace!(
            "Order book {}: adding order {} {} {} at {}",
            self.symbol,
            order.id(),
            order.side(),
            order.remaining_quantity(),
            order.price()
        );

        let seq = self.next_seq;
        self.next_seq += 1;

        // tail of the side/price level: lowest time priority at that price
        match order.side() {
            Side::Buy => {
                self.bids
                    .level_entry(order.price())
                    .push_back(order.id(), seq, order.remaining_quantity())
            }
            Side::Sell => {
                self.asks
                    .level_entry(order.price())
                    .push_back(order.id(), seq, order.remaining_quantity())
            }
        }
        self.orders.insert(order.id(), OrderEntry { order, seq });

        self.match_orders()
    }

    /// Build a limit order and add it to the book.
    pub fn add_limit_order(
        &mut self,
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        time_in_force: TimeInForce,
    ) -> Result<Vec<Trade>, OrderBookError> {
        trace!(
            "Adding limit order {} {} {} {} {}",
            id, price, quantity, side, time_in_force
        );
        self.add_order(Order::new(time_in_force, id, price, side, quantity))
    }
}
