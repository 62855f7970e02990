//! Cancellation and modification of resting orders.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, Price, Quantity, Side};
use super::trade::Trade;
use tracing::trace;

impl OrderBook {
    /// Cancel a resting order by id.
    ///
    /// Returns the cancelled order, or `None` if the id is not resting.
    /// Cancelling an already-gone order is a normal race for calling
    /// systems — the order may have just been fully filled — so an unknown
    /// id is a no-op, not an error. A fill-and-kill order only rests
    /// momentarily inside the matching pass, so an external cancel against
    /// one will normally find nothing.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Option<Order> {
        let order = self.remove_resting_order(order_id)?;
        trace!("Order book {}: cancelled order {}", self.symbol, order_id);
        Some(order)
    }

    /// Replace a resting order with a new side, price and quantity, keeping
    /// its id and duration policy.
    ///
    /// This is cancel-and-replace, never an in-place update: the order gives
    /// up its time priority and re-enters at the back of the queue for its
    /// new price, even when only the quantity changed. Returns the trades
    /// the re-entry generates; empty if the id is not resting.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Vec<Trade>, OrderBookError> {
        let Some(entry) = self.orders.get(&order_id) else {
            return Ok(Vec::new());
        };
        let time_in_force = entry.order.time_in_force();

        trace!(
            "Order book {}: modifying order {} to {} {} at {}",
            self.symbol, order_id, side, quantity, price
        );

        self.remove_resting_order(order_id);
        self.add_order(Order::new(time_in_force, order_id, price, side, quantity))
    }

    /// Remove a live order from its level and the store, returning it.
    ///
    /// The level is dropped from its side the instant it holds no more live
    /// orders. Store removal and level removal happen within one call, so no
    /// caller ever observes an order present in one structure and absent
    /// from the other.
    pub(super) fn remove_resting_order(&mut self, order_id: OrderId) -> Option<Order> {
        let entry = self.orders.remove(&order_id)?;
        let price = entry.order.price();
        let remaining = entry.order.remaining_quantity();

        match entry.order.side() {
            Side::Buy => {
                if let Some(level) = self.bids.level_mut(price) {
                    level.remove(remaining, &self.orders);
                    if level.is_empty() {
                        self.bids.remove_level(price);
                    }
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.level_mut(price) {
                    level.remove(remaining, &self.orders);
                    if level.is_empty() {
                        self.asks.remove_level(price);
                    }
                }
            }
        }

        Some(entry.order)
    }
}
