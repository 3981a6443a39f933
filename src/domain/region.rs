use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification attribute on a card, used only for swimlane filtering.
/// Never interpreted by the server-side move protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Office,
    Building,
    BuiltInPremises,
    Industrial,
    Warehouse,
    Commercial,
    Hotel,
    Other,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Office => "office",
            Region::Building => "building",
            Region::BuiltInPremises => "built_in_premises",
            Region::Industrial => "industrial",
            Region::Warehouse => "warehouse",
            Region::Commercial => "commercial",
            Region::Hotel => "hotel",
            Region::Other => "other",
        }
    }

    pub fn all() -> &'static [Region] {
        &[
            Region::Office,
            Region::Building,
            Region::BuiltInPremises,
            Region::Industrial,
            Region::Warehouse,
            Region::Commercial,
            Region::Hotel,
            Region::Other,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(Region::Office),
            "building" => Ok(Region::Building),
            "built_in_premises" => Ok(Region::BuiltInPremises),
            "industrial" => Ok(Region::Industrial),
            "warehouse" => Ok(Region::Warehouse),
            "commercial" => Ok(Region::Commercial),
            "hotel" => Ok(Region::Hotel),
            "other" => Ok(Region::Other),
            _ => Err(format!("Invalid region: {}", s)),
        }
    }
}
