//! Trade records produced by the matching loop.

use super::order::{OrderId, Price, Quantity};
use serde::{Deserialize, Serialize};

/// One side's share of a match: which order filled, at its own resting
/// price, for how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLeg {
    /// Order that participated in this match step
    pub order_id: OrderId,
    /// The order's own resting price
    pub price: Price,
    /// Quantity exchanged in this match step
    pub quantity: Quantity,
}

/// A single match step between the resting bid and ask queues.
///
/// Each leg reports its own order's price: when the bid was willing to pay
/// more than the ask asked, the two legs of one trade carry different prices.
/// There is no single clearing price.
///
/// Trades are transient return values of the operation that generated them;
/// the engine does not retain them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Bid-side leg
    pub bid: TradeLeg,
    /// Ask-side leg
    pub ask: TradeLeg,
}

impl Trade {
    /// Quantity exchanged by this match step. Both legs always carry the
    /// same quantity.
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}
