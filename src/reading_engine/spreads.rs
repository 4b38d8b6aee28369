//! Spread catalog: the named layouts a reading can be drawn into.
//!
//! Each spread's card count is the length of its position list, so the two
//! can never disagree.

use crate::reading_engine::models::SpreadDefinition;

pub static SPREADS: [SpreadDefinition; 3] = [
    SpreadDefinition {
        key: "single",
        label: "Single Card",
        positions: &["Message of the Moment"],
    },
    SpreadDefinition {
        key: "three",
        label: "Past, Present, Future",
        positions: &["Past", "Present", "Future"],
    },
    SpreadDefinition {
        key: "celtic",
        label: "Celtic Cross",
        positions: &[
            "Significator",
            "Crossing",
            "Foundation",
            "Recent Past",
            "Crowning",
            "Near Future",
            "Self/Attitude",
            "Environment",
            "Hopes & Fears",
            "Outcome",
        ],
    },
];

/// Resolve a spread key. Keys are matched exactly after trimming.
pub fn get_spread(key: &str) -> Option<&'static SpreadDefinition> {
    let key = key.trim();
    SPREADS.iter().find(|s| s.key == key)
}

/// Every spread, in declaration order.
pub fn all_spreads() -> &'static [SpreadDefinition] {
    &SPREADS
}
