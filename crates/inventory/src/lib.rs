//! Inventory quality domain module.
//!
//! This crate contains the per-category aging rules for inventory items,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod engine;
pub mod item;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, Category, SULFURAS};
pub use engine::GildedRose;
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
