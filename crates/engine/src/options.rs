use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized machine type key.
///
/// Only `Laptop` and `Desktop` take part in the license policy. Anything else
/// is kept under its normalized spelling so it still shows up in the tally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MachineType {
    Laptop,
    Desktop,
    Other(String),
}

impl MachineType {
    pub const LAPTOP_KEY: &'static str = "laptop";
    pub const DESKTOP_KEY: &'static str = "desktop";

    /// Trim and lower-case a raw field, then classify it.
    pub fn normalize(raw: &str) -> Self {
        let key = raw.trim().to_lowercase();
        match key.as_str() {
            Self::LAPTOP_KEY => Self::Laptop,
            Self::DESKTOP_KEY => Self::Desktop,
            _ => Self::Other(key),
        }
    }

    pub fn as_key(&self) -> &str {
        match self {
            Self::Laptop => Self::LAPTOP_KEY,
            Self::Desktop => Self::DESKTOP_KEY,
            Self::Other(key) => key,
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Tie-breaking rule used when pairing an odd number of leftover laptops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// 1 → 1, 3 → 2, 5 → 3
    #[default]
    #[serde(rename = "half-away")]
    HalfAwayFromZero,
    /// 1 → 0, 3 → 2, 5 → 2
    #[serde(rename = "half-even")]
    HalfToEven,
}

impl Rounding {
    /// Licenses consumed by `remaining` unpaired laptops, i.e.
    /// `floor(round(remaining / 2))` under this rule.
    pub const fn pairs(self, remaining: u64) -> u64 {
        let half = remaining / 2;
        if remaining % 2 == 0 {
            return half;
        }
        match self {
            Self::HalfAwayFromZero => half + 1,
            Self::HalfToEven => {
                if half % 2 == 0 {
                    half
                } else {
                    half + 1
                }
            }
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfAwayFromZero => f.write_str("half-away"),
            Self::HalfToEven => f.write_str("half-even"),
        }
    }
}
