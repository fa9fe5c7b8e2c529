//! Simulation driver for the shop: configuration, starting inventory, and
//! the day-by-day report.

pub mod config;
pub mod inventory;
pub mod report;

pub use config::{ConfigError, SimulationConfig};
