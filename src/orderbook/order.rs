//! Order entity and the basic domain types shared across the book.

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned order identifier. Unique among currently-live orders; the
/// engine rejects a second add while the first is still resting.
pub type OrderId = u64;

/// Price in signed ticks.
pub type Price = i32;

/// Per-order quantity. Level aggregates are carried as `u64` so that summing
/// many orders at one price cannot overflow.
pub type Quantity = u32;

/// Which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side
    Buy,
    /// Ask side
    Sell,
}

impl Side {
    /// The side this order matches against.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// Duration policy of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Rests until explicitly cancelled or fully filled.
    GoodTillCancel,
    /// Must match immediately on entry; an unfilled remainder is discarded,
    /// never left resting across calls.
    FillAndKill,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::GoodTillCancel => write!(f, "GoodTillCancel"),
            TimeInForce::FillAndKill => write!(f, "FillAndKill"),
        }
    }
}

/// A unit of standing interest in the book.
///
/// Identity, side, price and duration policy are fixed at construction; only
/// the remaining quantity changes, through [`Order::fill`]. The engine owns
/// every live order for its whole life and releases it when it is fully
/// filled, cancelled, or discarded as a fill-and-kill remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    side: Side,
    price: Price,
    time_in_force: TimeInForce,
    initial_quantity: Quantity,
    remaining_quantity: Quantity,
}

impl Order {
    /// Create a new order. `quantity` must be positive; id uniqueness is
    /// enforced by the engine at add time, not here.
    pub fn new(
        time_in_force: TimeInForce,
        id: OrderId,
        price: Price,
        side: Side,
        quantity: Quantity,
    ) -> Self {
        debug_assert!(quantity > 0, "order quantity must be positive");
        Self {
            id,
            side,
            price,
            time_in_force,
            initial_quantity: quantity,
            remaining_quantity: quantity,
        }
    }

    /// Order identity.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Side of the book this order rests on.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Limit price in ticks.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Duration policy.
    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    /// Quantity the order was created with.
    pub fn initial_quantity(&self) -> Quantity {
        self.initial_quantity
    }

    /// Quantity still open.
    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    /// Quantity already exchanged.
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    /// True once the remaining quantity reaches zero.
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Reduce the remaining quantity by `quantity`.
    ///
    /// Requesting more than the remaining quantity is a contract violation:
    /// the matching loop sizes every fill with `min`, so an `Overfill` here
    /// signals an internal logic defect, not bad market input. The quantity
    /// is never silently clamped.
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OrderBookError> {
        if quantity > self.remaining_quantity {
            return Err(OrderBookError::Overfill {
                order_id: self.id,
                requested: quantity,
                remaining: self.remaining_quantity,
            });
        }
        self.remaining_quantity -= quantity;
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}/{} at {} ({})",
            self.side,
            self.id,
            self.remaining_quantity,
            self.initial_quantity,
            self.price,
            self.time_in_force
        )
    }
}
