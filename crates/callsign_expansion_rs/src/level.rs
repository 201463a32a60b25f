use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How many verbalization strategies are applied. Levels are cumulative, a
/// higher level produces everything a lower one does.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ExpansionLevel {
    /// Standard ICAO phraseology, e.g. "speedbird seven seven seven".
    #[default]
    Standard = 5,
    /// Adds "double"/"triple" phrasing, e.g. "speedbird triple seven".
    Special = 9,
    /// Adds non-standard shortenings, e.g. "seven zero three".
    Full = 10,
}

impl ExpansionLevel {
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether rules of `other` run at this level.
    pub fn includes(self, other: ExpansionLevel) -> bool {
        self >= other
    }
}
