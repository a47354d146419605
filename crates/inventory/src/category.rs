//! Item categories and their daily aging rules.

use serde::{Deserialize, Serialize};

use crate::item::{Item, MIN_QUALITY};

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Closed set of aging behaviours, selected by exact item name.
///
/// Any name not in the table is [`Category::Normal`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Degrades by 1 per day, by 2 once expired.
    Normal,
    /// Improves by 1 per day, by 2 once expired.
    AgedBrie,
    /// Improves faster as the concert nears; worthless after it.
    BackstagePass,
    /// Legendary: never sold, never degrades.
    Sulfuras,
}

impl Category {
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASSES => Category::BackstagePass,
            SULFURAS => Category::Sulfuras,
            _ => Category::Normal,
        }
    }

    pub fn of(item: &Item) -> Self {
        Self::from_name(&item.name)
    }

    /// Canonical item name for this category. `None` for `Normal`, which
    /// covers every unlisted name.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Category::Normal => None,
            Category::AgedBrie => Some(AGED_BRIE),
            Category::BackstagePass => Some(BACKSTAGE_PASSES),
            Category::Sulfuras => Some(SULFURAS),
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Sulfuras)
    }

    /// Apply one day of aging to `item` under this category's rules.
    pub fn advance(self, item: &mut Item) {
        match self {
            Category::Normal => advance_normal(item),
            Category::AgedBrie => advance_aged_brie(item),
            Category::BackstagePass => advance_backstage_pass(item),
            Category::Sulfuras => {}
        }
    }
}

// The expiry checks below look at sell_in *after* the decrement, so the
// doubled rate already applies on the sell date itself.

fn advance_normal(item: &mut Item) {
    item.decrease_quality();
    item.decrease_sell_in();

    if item.is_expired() {
        item.decrease_quality();
    }
}

fn advance_aged_brie(item: &mut Item) {
    item.increase_quality();
    item.decrease_sell_in();

    if item.is_expired() {
        item.increase_quality();
    }
}

fn advance_backstage_pass(item: &mut Item) {
    item.increase_quality();

    if item.sell_in < 11 {
        item.increase_quality();
    }

    if item.sell_in < 6 {
        item.increase_quality();
    }

    item.decrease_sell_in();

    if item.is_expired() {
        item.quality = MIN_QUALITY;
    }
}
