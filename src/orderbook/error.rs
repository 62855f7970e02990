//! Order book error types

use super::order::{OrderId, Quantity};
use std::fmt;

/// Errors that can occur within the OrderBook.
///
/// Soft outcomes are not represented here: a duplicate id on add, an unknown
/// id on cancel or modify, and an unmatchable fill-and-kill order all come
/// back as empty results from the operation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBookError {
    /// A fill was requested for more than an order's remaining quantity.
    /// The matching loop sizes every fill with `min`, so this indicates an
    /// internal logic defect rather than a recoverable runtime condition.
    Overfill {
        /// Order that would have been overfilled
        order_id: OrderId,
        /// Quantity requested
        requested: Quantity,
        /// Quantity actually remaining on the order
        remaining: Quantity,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::Overfill {
                order_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Order {} cannot be filled for {} with only {} remaining",
                    order_id, requested, remaining
                )
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
