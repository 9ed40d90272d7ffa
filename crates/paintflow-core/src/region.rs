//! 區域模型（州 → 區域對照）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ScenarioError;

/// 銷售區域
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

/// 州 → 區域對照表（多對一，未列出的州不屬於任何區域）
const STATE_REGIONS: &[(&str, Region)] = &[
    ("Delhi", Region::North),
    ("Uttar Pradesh", Region::North),
    ("Rajasthan", Region::North),
    ("Punjab", Region::North),
    ("Haryana", Region::North),
    ("Uttarakhand", Region::North),
    ("Tamil Nadu", Region::South),
    ("Karnataka", Region::South),
    ("Kerala", Region::South),
    ("Andhra Pradesh", Region::South),
    ("Telangana", Region::South),
    ("West Bengal", Region::East),
    ("Odisha", Region::East),
    ("Bihar", Region::East),
    ("Jharkhand", Region::East),
    ("Assam", Region::East),
    ("Maharashtra", Region::West),
    ("Gujarat", Region::West),
    ("Goa", Region::West),
    ("Madhya Pradesh", Region::Central),
    ("Chhattisgarh", Region::Central),
];

impl Region {
    /// 所有區域（固定順序）
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    /// 查詢州所屬區域，未對應時返回 `None`
    ///
    /// 比對為精確比對（區分大小寫，不裁切空白）。
    pub fn of_state(state: &str) -> Option<Region> {
        STATE_REGIONS
            .iter()
            .find(|(name, _)| *name == state)
            .map(|(_, region)| *region)
    }

    /// 該區域包含的州
    pub fn states(self) -> impl Iterator<Item = &'static str> {
        STATE_REGIONS
            .iter()
            .filter(move |(_, region)| *region == self)
            .map(|(name, _)| *name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ScenarioError::UnknownRegion(s.to_string()))
    }
}
