//! The daily aging engine.

use crate::item::Item;
use crate::rule::{AgingRule, QualityChange, RulePolicy};

/// Tally of how quality moved across one simulated day.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub raised: usize,
    pub lowered: usize,
    pub unchanged: usize,
}

impl DaySummary {
    fn record(&mut self, change: QualityChange) {
        match change {
            QualityChange::Raised => self.raised += 1,
            QualityChange::Lowered => self.lowered += 1,
            QualityChange::Unchanged => self.unchanged += 1,
        }
    }
}

/// Advance every item by one day, in order, in place.
pub fn advance_one_day(items: &mut [Item], policy: &RulePolicy) {
    age_one_day(items, policy);
}

/// Single path for a day's aging, shared by [`advance_one_day`] and
/// [`GildedRose::update_quality`].
fn age_one_day(items: &mut [Item], policy: &RulePolicy) -> DaySummary {
    let mut summary = DaySummary::default();
    for item in items.iter_mut() {
        let rule = AgingRule::for_name(item.name());
        let change = rule.apply(item, policy);
        tracing::trace!(
            item = item.name(),
            %rule,
            sell_in = item.sell_in(),
            quality = item.quality(),
            ?change,
            "item aged"
        );
        summary.record(change);
    }
    tracing::debug!(
        items = items.len(),
        raised = summary.raised,
        lowered = summary.lowered,
        unchanged = summary.unchanged,
        "day advanced"
    );
    summary
}

/// The shop: owns its inventory and ages it one day at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    policy: RulePolicy,
    day: u32,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_policy(items, RulePolicy::default())
    }

    pub fn with_policy(items: Vec<Item>, policy: RulePolicy) -> Self {
        Self {
            items,
            policy,
            day: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn policy(&self) -> &RulePolicy {
        &self.policy
    }

    /// Number of days simulated so far.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Advance the whole inventory by one day.
    pub fn update_quality(&mut self) -> DaySummary {
        let summary = age_one_day(&mut self.items, &self.policy);
        self.day = self.day.saturating_add(1);
        summary
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }
}
