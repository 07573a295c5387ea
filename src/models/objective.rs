//! Objective events: neutral monsters, towers, plates and first blood.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Lane, MatchId, Side, UnknownName};

/// Elemental drake type. Parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum DrakeKind {
    Infernal,
    Mountain,
    Ocean,
    Cloud,
    Hextech,
    Chemtech,
    Elder,
}

impl fmt::Display for DrakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrakeKind::Infernal => "infernal",
            DrakeKind::Mountain => "mountain",
            DrakeKind::Ocean => "ocean",
            DrakeKind::Cloud => "cloud",
            DrakeKind::Hextech => "hextech",
            DrakeKind::Chemtech => "chemtech",
            DrakeKind::Elder => "elder",
        };
        f.write_str(name)
    }
}

impl FromStr for DrakeKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infernal" | "fire" => Ok(DrakeKind::Infernal),
            "mountain" | "earth" => Ok(DrakeKind::Mountain),
            "ocean" | "water" => Ok(DrakeKind::Ocean),
            "cloud" | "air" => Ok(DrakeKind::Cloud),
            "hextech" => Ok(DrakeKind::Hextech),
            "chemtech" => Ok(DrakeKind::Chemtech),
            "elder" => Ok(DrakeKind::Elder),
            _ => Err(UnknownName {
                kind: "drake",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DrakeKind {
    type Error = UnknownName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrakeEvent {
    pub match_id: MatchId,
    pub team: String,
    pub side: Side,
    pub kind: DrakeKind,
    /// First drake of the match
    pub first: bool,
    pub time_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeraldEvent {
    pub match_id: MatchId,
    pub team: String,
    pub side: Side,
    pub first: bool,
    pub time_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaronEvent {
    pub match_id: MatchId,
    pub team: String,
    pub side: Side,
    #[serde(default)]
    pub first: bool,
    pub time_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstBloodEvent {
    pub match_id: MatchId,
    pub team: String,
    pub side: Side,
    pub killer: String,
    #[serde(default)]
    pub assistants: Vec<String>,
    pub time_secs: u32,
}

/// A destroyed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerEvent {
    pub match_id: MatchId,
    /// Team that destroyed the tower
    pub team: String,
    pub side: Side,
    pub lane: Lane,
    pub killer: String,
    #[serde(default)]
    pub assistants: Vec<String>,
    /// First tower of the match in this lane
    pub first: bool,
    pub time_secs: u32,
}

/// A destroyed turret plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateEvent {
    pub match_id: MatchId,
    pub team: String,
    pub side: Side,
    pub lane: Lane,
    pub killer: String,
    #[serde(default)]
    pub assistants: Vec<String>,
    pub time_secs: u32,
}
