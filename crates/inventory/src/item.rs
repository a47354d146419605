use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;

/// Lowest quality an ordinary item can reach.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality an ordinary item can reach.
pub const MAX_QUALITY: i64 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i64 = 80;

/// A single inventory record.
///
/// Preconditions (not checked by [`Item::new`]): ordinary items start with
/// `quality` in `[MIN_QUALITY, MAX_QUALITY]`, legendary items at exactly
/// `LEGENDARY_QUALITY`. Use [`Item::try_new`] to have them checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left until the sell date. Negative once expired.
    pub sell_in: i64,
    pub quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Construct an item, rejecting a starting quality its category can't hold.
    pub fn try_new(name: impl Into<String>, sell_in: i64, quality: i64) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        item.validate()?;
        Ok(item)
    }

    pub fn category(&self) -> Category {
        Category::of(self)
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Check the quality precondition for this item's category.
    pub fn validate(&self) -> DomainResult<()> {
        if self.category().is_legendary() {
            if self.quality != LEGENDARY_QUALITY {
                return Err(DomainError::validation(format!(
                    "legendary item must have quality {LEGENDARY_QUALITY} ({self})"
                )));
            }
            return Ok(());
        }

        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.quality) {
            return Err(DomainError::validation(format!(
                "quality must be within {MIN_QUALITY}..={MAX_QUALITY} ({self})"
            )));
        }
        Ok(())
    }

    /// +1, unless already at the ceiling.
    pub(crate) fn increase_quality(&mut self) {
        if self.quality < MAX_QUALITY {
            self.quality += 1;
        }
    }

    /// -1, unless already at the floor.
    pub(crate) fn decrease_quality(&mut self) {
        if self.quality > MIN_QUALITY {
            self.quality -= 1;
        }
    }

    pub(crate) fn decrease_sell_in(&mut self) {
        // Saturates at i64::MIN instead of overflowing.
        self.sell_in = self.sell_in.saturating_sub(1);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
