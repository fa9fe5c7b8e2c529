//! Inventory aging domain module.
//!
//! This crate contains the shop's aging rules, implemented purely as
//! deterministic domain logic (no IO, no storage). Callers own the item list
//! and decide how many days to simulate.

pub mod engine;
pub mod item;
pub mod rule;

pub use engine::{DaySummary, GildedRose, advance_one_day};
pub use item::Item;
pub use rule::{
    AGED_BRIE, AgingRule, BACKSTAGE_PASSES, CONJURED, DEFAULT_CONJURED_EXPIRED_DELTA,
    QualityChange, RulePolicy, SULFURAS,
};
