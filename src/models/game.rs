//! Match, team and player records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MatchId, Role, RoleSlots, Side};

/// A team, identified by its short code within a competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub code: String,
    pub competition: String,
}

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,

    /// Provider code
    pub code: String,

    /// Primary role, if known
    pub role: Option<Role>,

    /// Owning team code
    pub team: String,
}

/// The ten players of a match, by side and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub blue: RoleSlots<String>,
    pub red: RoleSlots<String>,
}

impl Lineup {
    pub fn side(&self, side: Side) -> &RoleSlots<String> {
        match side {
            Side::Blue => &self.blue,
            Side::Red => &self.red,
        }
    }

    pub fn contains(&self, player: &str) -> bool {
        Side::ALL
            .iter()
            .any(|&side| self.side(side).iter().any(|(_, p)| p == player))
    }
}

/// A completed match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,

    /// Game patch (e.g., "14.3")
    pub patch: String,

    /// Competition label (e.g., "LCK 2024 Spring")
    pub competition: String,

    pub date: NaiveDate,

    /// Game length in seconds
    pub duration_secs: u32,

    pub blue_team: String,
    pub red_team: String,
    pub winner: String,

    pub lineup: Lineup,
}

impl Match {
    pub fn has_team(&self, team: &str) -> bool {
        self.blue_team == team || self.red_team == team
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_secs as f64 / 60.0
    }
}
