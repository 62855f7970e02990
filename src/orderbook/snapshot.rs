//! Aggregated order book snapshots for market data

use super::order::Price;
use serde::{Deserialize, Serialize};

/// One aggregated price level: a price and the total remaining quantity
/// across every order resting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Level price
    pub price: Price,
    /// Aggregate remaining quantity at this price
    pub quantity: u64,
}

/// A snapshot of the order book state at a specific point in time.
///
/// Levels are aggregated L2-style: per-price totals, no per-order detail.
/// Bids are ordered best (highest) first, asks best (lowest) first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid price levels
    pub bids: Vec<LevelInfo>,

    /// Ask price levels
    pub asks: Vec<LevelInfo>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and quantity.
    pub fn best_bid(&self) -> Option<(Price, u64)> {
        self.bids.first().map(|level| (level.price, level.quantity))
    }

    /// Get the best ask price and quantity.
    pub fn best_ask(&self) -> Option<(Price, u64)> {
        self.asks.first().map(|level| (level.price, level.quantity))
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((f64::from(bid_price) + f64::from(ask_price)) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some(ask_price - bid_price),
            _ => None,
        }
    }

    /// Total resting quantity on the bid side.
    pub fn total_bid_volume(&self) -> u64 {
        self.bids.iter().map(|level| level.quantity).sum()
    }

    /// Total resting quantity on the ask side.
    pub fn total_ask_volume(&self) -> u64 {
        self.asks.iter().map(|level| level.quantity).sum()
    }
}
