//! The update engine: owns an inventory and ages it one day at a time.

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// An ordered inventory that ages in place.
///
/// Items are never added, removed, or reordered by the engine. Each item is
/// aged independently of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    days_elapsed: u64,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    /// Like [`GildedRose::new`], but rejects items whose starting quality
    /// their category can't hold.
    pub fn try_new(items: Vec<Item>) -> DomainResult<Self> {
        for (index, item) in items.iter().enumerate() {
            item.validate().map_err(|err| match err {
                DomainError::Validation(msg) => {
                    DomainError::validation(format!("item {index}: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(Self::new(items))
    }

    /// Build from `(name, sell_in, quality)` tuples, keeping their order.
    pub fn from_tuples<N, I>(items: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, i64, i64)>,
    {
        Self::new(
            items
                .into_iter()
                .map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
                .collect(),
        )
    }

    /// Age every item by one day, in order.
    pub fn advance_one_day(&mut self) {
        self.days_elapsed += 1;
        tracing::debug!(
            day = self.days_elapsed,
            items = self.items.len(),
            "advancing inventory by one day"
        );

        for item in &mut self.items {
            let category = Category::of(item);
            let (sell_in_before, quality_before) = (item.sell_in, item.quality);

            category.advance(item);

            tracing::trace!(
                name = %item.name,
                ?category,
                sell_in_before,
                sell_in = item.sell_in,
                quality_before,
                quality = item.quality,
                "item aged"
            );
        }
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }

    /// Number of `advance_one_day` calls so far.
    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    /// Verify the quality bounds hold for every item.
    ///
    /// Always `Ok` when every item satisfied its construction precondition.
    pub fn check_invariants(&self) -> DomainResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            let holds = if Category::of(item).is_legendary() {
                item.quality == LEGENDARY_QUALITY
            } else {
                (MIN_QUALITY..=MAX_QUALITY).contains(&item.quality)
            };
            if !holds {
                return Err(DomainError::invariant(format!(
                    "item {index} has quality out of bounds ({item})"
                )));
            }
        }
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
