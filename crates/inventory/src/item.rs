use serde::{Deserialize, Serialize};

/// A single shop item.
///
/// The name is fixed at construction and only ever used to pick an aging rule.
/// `sell_in` and `quality` are advanced in place by the engine, once per day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left before the deadline. Zero or negative means it has passed.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub(crate) fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }

    pub(crate) fn shift_sell_in(&mut self, delta: i32) {
        self.sell_in = self.sell_in.saturating_add(delta);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
