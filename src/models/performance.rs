//! Per-player performance records: end-of-game totals and timeline snapshots.

use serde::{Deserialize, Serialize};

use super::{MatchId, Role, Side, SnapshotId};

/// A player's end-of-game totals for one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndGameStat {
    pub match_id: MatchId,
    pub player: String,
    pub team: String,
    pub role: Role,
    pub side: Side,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub gold: f64,
    pub minions: u32,
    pub wards_placed: u32,
    pub wards_killed: u32,
    pub vision_score: u32,
    pub damage_to_champions: f64,
    pub damage_to_towers: f64,
}

/// A player's state at a minute mark of one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSnapshot {
    pub id: SnapshotId,
    pub match_id: MatchId,
    pub player: String,
    pub team: String,
    pub side: Side,
    pub role: Role,
    pub champion: String,

    /// Minute mark this snapshot was taken at
    pub minute: u32,

    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub gold: f64,
    pub minions: u32,
    pub exp: f64,

    /// Snapshot of the lane opponent at the same minute
    #[serde(default)]
    pub opponent: Option<SnapshotId>,
}

impl TimeSnapshot {
    /// Create a snapshot with zeroed stats and a derived id.
    pub fn new(
        match_id: MatchId,
        player: String,
        team: String,
        side: Side,
        role: Role,
        champion: String,
        minute: u32,
    ) -> Self {
        let id = SnapshotId::for_snapshot(&match_id, &player, minute);
        Self {
            id,
            match_id,
            player,
            team,
            side,
            role,
            champion,
            minute,
            kills: 0,
            deaths: 0,
            assists: 0,
            gold: 0.0,
            minions: 0,
            exp: 0.0,
            opponent: None,
        }
    }

    /// Builder method to set gold and experience.
    pub fn with_resources(mut self, gold: f64, exp: f64) -> Self {
        self.gold = gold;
        self.exp = exp;
        self
    }

    /// Builder method to set kills/deaths/assists and minions.
    pub fn with_score(mut self, kills: u32, deaths: u32, assists: u32, minions: u32) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self.assists = assists;
        self.minions = minions;
        self
    }

    /// Builder method to link the lane opponent's snapshot.
    pub fn with_opponent(mut self, opponent: SnapshotId) -> Self {
        self.opponent = Some(opponent);
        self
    }
}
