//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod bounds;
pub mod error;
pub mod value_object;

pub use bounds::{MAX_QUALITY, MIN_QUALITY, QualityBounds};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
