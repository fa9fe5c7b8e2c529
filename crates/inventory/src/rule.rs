//! Aging rules: how each kind of item changes over one day.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, QualityBounds, ValueObject};

use crate::item::Item;

pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured Mana Cake";

/// Default post-deadline quality delta for conjured items.
pub const DEFAULT_CONJURED_EXPIRED_DELTA: i32 = -4;

/// Tunable knobs of the rule set.
///
/// Deserialization goes through [`RulePolicy::new`], so a policy read from
/// JSON is held to the same checks as one built in code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulePolicyRecord")]
pub struct RulePolicy {
    conjured_expired_delta: i32,
}

/// Unvalidated wire shape of [`RulePolicy`].
#[derive(Deserialize)]
struct RulePolicyRecord {
    conjured_expired_delta: i32,
}

impl TryFrom<RulePolicyRecord> for RulePolicy {
    type Error = DomainError;

    fn try_from(record: RulePolicyRecord) -> Result<Self, Self::Error> {
        RulePolicy::new(record.conjured_expired_delta)
    }
}

impl RulePolicy {
    /// Build a policy with an explicit conjured post-deadline delta.
    ///
    /// The delta must not be positive: expired conjured goods never improve.
    pub fn new(conjured_expired_delta: i32) -> DomainResult<Self> {
        if conjured_expired_delta > 0 {
            return Err(DomainError::validation(format!(
                "conjured expired delta must not be positive (got: {conjured_expired_delta})"
            )));
        }
        Ok(Self {
            conjured_expired_delta,
        })
    }

    pub fn conjured_expired_delta(&self) -> i32 {
        self.conjured_expired_delta
    }
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self {
            conjured_expired_delta: DEFAULT_CONJURED_EXPIRED_DELTA,
        }
    }
}

impl ValueObject for RulePolicy {}

/// Outcome of one day's quality evaluation for a single item.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QualityChange {
    Raised,
    Lowered,
    /// The rule yielded a zero delta; quality was not touched.
    Unchanged,
}

/// The closed set of aging rules, selected by item name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AgingRule {
    /// Never sold, never degrades.
    Legendary,
    /// Fallback for every unrecognised name.
    Common,
    /// Gets better with age.
    AgingImproves,
    /// Gains value as the event nears, worthless afterwards.
    EventTicket,
    /// Degrades twice as fast as common goods.
    Conjured,
}

impl AgingRule {
    /// Resolve the rule for an item name. Exact match; unknown names are `Common`.
    pub fn for_name(name: &str) -> Self {
        match name {
            SULFURAS => AgingRule::Legendary,
            AGED_BRIE => AgingRule::AgingImproves,
            BACKSTAGE_PASSES => AgingRule::EventTicket,
            CONJURED => AgingRule::Conjured,
            _ => AgingRule::Common,
        }
    }

    pub fn sell_in_delta(&self) -> i32 {
        match self {
            AgingRule::Legendary => 0,
            _ => -1,
        }
    }

    /// Quality delta while the deadline is still ahead.
    ///
    /// `days_remaining` is the countdown *before* today's decrement.
    pub fn quality_delta_before_deadline(&self, days_remaining: i32) -> i32 {
        match self {
            AgingRule::Legendary => 0,
            AgingRule::Common => -1,
            AgingRule::AgingImproves => 1,
            AgingRule::EventTicket => match days_remaining {
                ..=5 => 3,
                6..=10 => 2,
                _ => 1,
            },
            AgingRule::Conjured => -2,
        }
    }

    /// Quality delta once the deadline has passed (`sell_in <= 0`).
    pub fn quality_delta_after_deadline(&self, current_quality: i32, policy: &RulePolicy) -> i32 {
        match self {
            AgingRule::Legendary => 0,
            AgingRule::Common => -2,
            AgingRule::AgingImproves => 2,
            AgingRule::EventTicket => current_quality.saturating_neg(),
            AgingRule::Conjured => policy.conjured_expired_delta(),
        }
    }

    /// Advance `item` by one day under this rule.
    ///
    /// Quality is evaluated against the pre-decrement `sell_in`, then `sell_in`
    /// moves. Swapping the two changes behaviour on the deadline day.
    pub fn apply(&self, item: &mut Item, policy: &RulePolicy) -> QualityChange {
        let change = if item.sell_in() <= 0 {
            self.quality_delta_after_deadline(item.quality(), policy)
        } else {
            self.quality_delta_before_deadline(item.sell_in())
        };

        let outcome = if change == 0 {
            QualityChange::Unchanged
        } else {
            item.set_quality(QualityBounds::STANDARD.shift(item.quality(), change));
            if change > 0 {
                QualityChange::Raised
            } else {
                QualityChange::Lowered
            }
        };

        item.shift_sell_in(self.sell_in_delta());
        outcome
    }
}

impl core::fmt::Display for AgingRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            AgingRule::Legendary => "legendary",
            AgingRule::Common => "common",
            AgingRule::AgingImproves => "aging_improves",
            AgingRule::EventTicket => "event_ticket",
            AgingRule::Conjured => "conjured",
        };
        f.write_str(label)
    }
}
