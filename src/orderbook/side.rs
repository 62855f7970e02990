//! Price-ordered book sides with an explicit, named ordering policy.

use super::level::PriceLevel;
use super::order::Price;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Ordering policy for one side of the book: maps each price to the key the
/// side's map sorts by, so that the first entry is always the best price.
///
/// Keeping the ordering a named type rather than an incidental comparator
/// makes the price-priority contract of each side visible and testable on
/// its own.
pub trait SideOrdering {
    /// Sort key derived from a price.
    type Key: Ord + Copy + std::fmt::Debug;

    /// Map a price to its sort key.
    fn key(price: Price) -> Self::Key;

    /// Recover the price from a sort key.
    fn price(key: Self::Key) -> Price;
}

/// Bid ordering: highest price first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingPrice;

impl SideOrdering for DescendingPrice {
    type Key = Reverse<Price>;

    fn key(price: Price) -> Self::Key {
        Reverse(price)
    }

    fn price(key: Self::Key) -> Price {
        key.0
    }
}

/// Ask ordering: lowest price first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AscendingPrice;

impl SideOrdering for AscendingPrice {
    type Key = Price;

    fn key(price: Price) -> Self::Key {
        price
    }

    fn price(key: Self::Key) -> Price {
        key
    }
}

/// One side of the book: price levels sorted best-first under the side's
/// ordering policy.
#[derive(Debug)]
pub struct BookSide<O: SideOrdering> {
    levels: BTreeMap<O::Key, PriceLevel>,
    _ordering: PhantomData<O>,
}

impl<O: SideOrdering> BookSide<O> {
    /// Create an empty side.
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            _ordering: PhantomData,
        }
    }

    /// True if the side holds no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels on this side.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Best price on this side: highest bid or lowest ask.
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().map(|key| O::price(*key))
    }

    /// The level resting at `price`, if any.
    pub fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&O::key(price))
    }

    /// Iterate levels from best price to worst.
    pub fn iter(&self) -> impl Iterator<Item = &PriceLevel> {
        self.levels.values()
    }

    /// The level holding the best price.
    pub(super) fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        self.levels.values_mut().next()
    }

    pub(super) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&O::key(price))
    }

    /// The level at `price`, created if absent.
    pub(super) fn level_entry(&mut self, price: Price) -> &mut PriceLevel {
        self.levels
            .entry(O::key(price))
            .or_insert_with(|| PriceLevel::new(price))
    }

    /// Drop the level at `price` once it holds no live orders.
    pub(super) fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        self.levels.remove(&O::key(price))
    }
}

impl<O: SideOrdering> Default for BookSide<O> {
    fn default() -> Self {
        Self::new()
    }
}
