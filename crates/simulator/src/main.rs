use anyhow::Context;

use gildedrose_inventory::GildedRose;
use gildedrose_sim::SimulationConfig;
use gildedrose_sim::inventory::{load_inventory, sample_inventory};
use gildedrose_sim::report;

fn main() -> anyhow::Result<()> {
    let config = SimulationConfig::from_env(std::env::args().nth(1))
        .context("invalid simulation configuration")?;

    gildedrose_observability::init_with(config.log_format);

    let items = match &config.inventory_path {
        Some(path) => load_inventory(path)?,
        None => sample_inventory(),
    };

    let mut shop = GildedRose::with_policy(items, config.policy);
    tracing::info!(
        items = shop.items().len(),
        days = config.days,
        conjured_expired_delta = shop.policy().conjured_expired_delta(),
        "starting simulation"
    );

    print!("{}", report::run(&mut shop, config.days));

    tracing::info!(day = shop.day(), "simulation finished");
    Ok(())
}
