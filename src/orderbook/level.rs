//! A single price level: the FIFO of orders resting at one price.

use super::book::OrderEntry;
use super::order::{Order, OrderId, Price, Quantity};
use std::collections::{HashMap, VecDeque};

/// Queue slot compaction kicks in once the queue reaches this length and
/// tombstones outnumber live slots.
const COMPACT_MIN_LEN: usize = 32;

/// Queue slot: an order identity plus the arrival sequence it was admitted
/// under. The sequence distinguishes a cancelled order from a later order
/// that reuses the same id at the same price.
#[derive(Debug, Clone, Copy)]
struct LevelSlot {
    id: OrderId,
    seq: u64,
}

/// All orders resting at one price on one side, in time priority.
///
/// The level holds identity keys, never the orders themselves; the book's
/// order store is the single owner. Removal by identity is O(1) amortized:
/// the removed order leaves the store and its queue slot becomes a tombstone,
/// pruned when it reaches the head or when tombstones dominate the queue.
/// Tombstones are never caller-observable; the live count and the aggregate
/// quantity track live orders only.
#[derive(Debug)]
pub struct PriceLevel {
    price: Price,
    queue: VecDeque<LevelSlot>,
    live_orders: usize,
    total_quantity: u64,
}

impl PriceLevel {
    pub(super) fn new(price: Price) -> Self {
        Self {
            price,
            queue: VecDeque::new(),
            live_orders: 0,
            total_quantity: 0,
        }
    }

    /// The price shared by every order at this level.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Count of live orders at this level.
    pub fn order_count(&self) -> usize {
        self.live_orders
    }

    /// Aggregate remaining quantity across live orders.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// True once no live orders remain. The book removes the level from its
    /// side the instant this holds.
    pub fn is_empty(&self) -> bool {
        self.live_orders == 0
    }

    /// Append an order at the back of the queue (lowest time priority).
    pub(super) fn push_back(&mut self, id: OrderId, seq: u64, quantity: Quantity) {
        self.queue.push_back(LevelSlot { id, seq });
        self.live_orders += 1;
        self.total_quantity += u64::from(quantity);
    }

    /// The oldest live order at this level. Dead slots are pruned off the
    /// head on the way.
    pub(super) fn front(&mut self, orders: &HashMap<OrderId, OrderEntry>) -> Option<OrderId> {
        while let Some(slot) = self.queue.front() {
            if slot_is_live(slot, orders) {
                return Some(slot.id);
            }
            self.queue.pop_front();
        }
        None
    }

    /// Drop the head slot after its order has been fully filled and removed
    /// from the store.
    pub(super) fn pop_front(&mut self) {
        if self.queue.pop_front().is_some() {
            debug_assert!(self.live_orders > 0);
            self.live_orders -= 1;
        }
    }

    /// Account for a partial fill of one of this level's orders.
    pub(super) fn reduce_quantity(&mut self, quantity: Quantity) {
        self.total_quantity = self.total_quantity.saturating_sub(u64::from(quantity));
    }

    /// Account for the removal of a live order that may sit anywhere in the
    /// queue. The slot itself stays behind as a tombstone.
    pub(super) fn remove(&mut self, remaining: Quantity, orders: &HashMap<OrderId, OrderEntry>) {
        debug_assert!(self.live_orders > 0);
        self.live_orders -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(u64::from(remaining));
        self.maybe_compact(orders);
    }

    /// Iterate live orders in time priority.
    pub(super) fn iter_orders<'a>(
        &'a self,
        orders: &'a HashMap<OrderId, OrderEntry>,
    ) -> impl Iterator<Item = &'a Order> + 'a {
        self.queue.iter().filter_map(move |slot| {
            orders
                .get(&slot.id)
                .filter(|entry| entry.seq == slot.seq)
                .map(|entry| &entry.order)
        })
    }

    /// Rebuild the queue without tombstones once they outnumber live slots.
    fn maybe_compact(&mut self, orders: &HashMap<OrderId, OrderEntry>) {
        let dead = self.queue.len() - self.live_orders;
        if self.queue.len() >= COMPACT_MIN_LEN && dead > self.live_orders {
            self.queue.retain(|slot| slot_is_live(slot, orders));
        }
    }
}

fn slot_is_live(slot: &LevelSlot, orders: &HashMap<OrderId, OrderEntry>) -> bool {
    orders
        .get(&slot.id)
        .is_some_and(|entry| entry.seq == slot.seq)
}
