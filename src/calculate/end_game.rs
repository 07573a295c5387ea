//! End-of-game performance averages per player.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::grouping::{per_minute, ratio, Mean, TeamSideMap, TeamSideTable};
use crate::models::{EndGameStat, Role};
use crate::search::{MatchSelection, RoleFilter};
use crate::storage::MatchStore;

/// Averages for one player over the selected matches.
///
/// Derived ratios are `None` when their denominator averages to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAverages {
    pub games: u32,
    pub kda: Option<f64>,
    pub gpm: Option<f64>,
    pub cspm: Option<f64>,
    pub vspm: Option<f64>,
    pub dpm: Option<f64>,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_gold: f64,
    pub avg_minions: f64,
    pub avg_wards_placed: f64,
    pub avg_wards_killed: f64,
    pub avg_vision_score: f64,
    pub avg_damage_to_champions: f64,
    pub avg_damage_to_towers: f64,
    pub avg_game_minutes: Option<f64>,
}

/// Team → side → role → player → averages.
pub type EndGameStats = TeamSideMap<BTreeMap<Role, BTreeMap<String, PlayerAverages>>>;

#[derive(Debug, Default)]
struct Accumulator {
    kills: Mean,
    deaths: Mean,
    assists: Mean,
    gold: Mean,
    minions: Mean,
    wards_placed: Mean,
    wards_killed: Mean,
    vision_score: Mean,
    damage_to_champions: Mean,
    damage_to_towers: Mean,
    game_minutes: Mean,
}

impl Accumulator {
    fn push(&mut self, row: &EndGameStat, game_minutes: Option<f64>) {
        self.kills.push(row.kills as f64);
        self.deaths.push(row.deaths as f64);
        self.assists.push(row.assists as f64);
        self.gold.push(row.gold);
        self.minions.push(row.minions as f64);
        self.wards_placed.push(row.wards_placed as f64);
        self.wards_killed.push(row.wards_killed as f64);
        self.vision_score.push(row.vision_score as f64);
        self.damage_to_champions.push(row.damage_to_champions);
        self.damage_to_towers.push(row.damage_to_towers);
        if let Some(minutes) = game_minutes {
            self.game_minutes.push(minutes);
        }
    }

    fn finish(&self) -> PlayerAverages {
        let avg_kills = self.kills.value_or_zero();
        let avg_deaths = self.deaths.value_or_zero();
        let avg_assists = self.assists.value_or_zero();
        let avg_gold = self.gold.value_or_zero();
        let avg_minions = self.minions.value_or_zero();
        let avg_vision_score = self.vision_score.value_or_zero();
        let avg_damage_to_champions = self.damage_to_champions.value_or_zero();
        let minutes = self.game_minutes.value();

        PlayerAverages {
            games: self.kills.count(),
            kda: ratio(avg_kills + avg_assists, avg_deaths),
            gpm: per_minute(avg_gold, minutes),
            cspm: per_minute(avg_minions, minutes),
            vspm: per_minute(avg_vision_score, minutes),
            dpm: per_minute(avg_damage_to_champions, minutes),
            avg_kills,
            avg_deaths,
            avg_assists,
            avg_gold,
            avg_minions,
            avg_wards_placed: self.wards_placed.value_or_zero(),
            avg_wards_killed: self.wards_killed.value_or_zero(),
            avg_vision_score,
            avg_damage_to_champions,
            avg_damage_to_towers: self.damage_to_towers.value_or_zero(),
            avg_game_minutes: minutes,
        }
    }
}

/// Average every end-game stat per team, side, role and player.
///
/// Per-minute rates divide by the average length of the games the player's
/// rows come from.
pub fn end_game_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
    role: RoleFilter,
) -> EndGameStats {
    let mut table: TeamSideTable<BTreeMap<Role, BTreeMap<String, Accumulator>>> =
        TeamSideTable::new();
    let mut rows = 0;

    for row in selection
        .scope(store.end_game_stats())
        .filter(|row| role.accepts(row.role))
    {
        rows += 1;
        let minutes = store.find_match(&row.match_id).map(|m| m.duration_minutes());
        table
            .slot(&row.team, row.side)
            .entry(row.role)
            .or_default()
            .entry(row.player.clone())
            .or_default()
            .push(row, minutes);
    }

    debug!("End-game stats: {} rows (role filter: {})", rows, role);
    table.finish(|roles| {
        roles
            .into_iter()
            .map(|(role, players)| {
                let players = players
                    .into_iter()
                    .map(|(player, acc)| (player, acc.finish()))
                    .collect();
                (role, players)
            })
            .collect()
    })
}
