//! Per-minute-mark averages from timeline snapshots, with lane differentials.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::grouping::{Mean, TeamSideMap, TeamSideTable};
use crate::models::{Role, TimeSnapshot};
use crate::search::{MatchSelection, RoleFilter};
use crate::storage::MatchStore;

/// Averages at one minute mark.
///
/// `gold_diff` and `exp_diff` average only over snapshots with a resolvable
/// lane opponent, and are `None` when there were none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketAverages {
    pub samples: u32,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub avg_gold: f64,
    pub avg_minions: f64,
    pub avg_exp: f64,
    pub diff_samples: u32,
    pub gold_diff: Option<f64>,
    pub exp_diff: Option<f64>,
}

/// Minute mark → averages.
pub type Timeline = BTreeMap<u32, BucketAverages>;

/// Team → side → role → player → champion → minute → averages.
pub type TimeSeriesStats =
    TeamSideMap<BTreeMap<Role, BTreeMap<String, BTreeMap<String, Timeline>>>>;

#[derive(Debug, Default)]
struct Accumulator {
    kills: Mean,
    deaths: Mean,
    assists: Mean,
    gold: Mean,
    minions: Mean,
    exp: Mean,
    gold_diff: Mean,
    exp_diff: Mean,
}

impl Accumulator {
    fn push(&mut self, snap: &TimeSnapshot, opponent: Option<&TimeSnapshot>) {
        self.kills.push(snap.kills as f64);
        self.deaths.push(snap.deaths as f64);
        self.assists.push(snap.assists as f64);
        self.gold.push(snap.gold);
        self.minions.push(snap.minions as f64);
        self.exp.push(snap.exp);
        if let Some(opponent) = opponent {
            self.gold_diff.push(snap.gold - opponent.gold);
            self.exp_diff.push(snap.exp - opponent.exp);
        }
    }

    fn finish(&self) -> BucketAverages {
        BucketAverages {
            samples: self.gold.count(),
            avg_kills: self.kills.value_or_zero(),
            avg_deaths: self.deaths.value_or_zero(),
            avg_assists: self.assists.value_or_zero(),
            avg_gold: self.gold.value_or_zero(),
            avg_minions: self.minions.value_or_zero(),
            avg_exp: self.exp.value_or_zero(),
            diff_samples: self.gold_diff.count(),
            gold_diff: self.gold_diff.value(),
            exp_diff: self.exp_diff.value(),
        }
    }
}

type Nested<V> = BTreeMap<Role, BTreeMap<String, BTreeMap<String, BTreeMap<u32, V>>>>;

/// Average snapshots per team, side, role, player, champion and minute mark.
pub fn time_series_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
    role: RoleFilter,
) -> TimeSeriesStats {
    let mut table: TeamSideTable<Nested<Accumulator>> = TeamSideTable::new();
    let mut snapshots = 0;
    let mut linked = 0;

    for snap in selection
        .scope(store.snapshots())
        .filter(|snap| role.accepts(snap.role))
    {
        let opponent = store.opponent_of(snap);
        snapshots += 1;
        if opponent.is_some() {
            linked += 1;
        }

        table
            .slot(&snap.team, snap.side)
            .entry(snap.role)
            .or_default()
            .entry(snap.player.clone())
            .or_default()
            .entry(snap.champion.clone())
            .or_default()
            .entry(snap.minute)
            .or_default()
            .push(snap, opponent);
    }

    debug!(
        "Time series: {} snapshots, {} with lane opponent (role filter: {})",
        snapshots, linked, role
    );
    table.finish(|roles| {
        roles
            .into_iter()
            .map(|(role, players)| {
                let players = players
                    .into_iter()
                    .map(|(player, champions)| {
                        let champions = champions
                            .into_iter()
                            .map(|(champion, minutes)| {
                                let minutes = minutes
                                    .into_iter()
                                    .map(|(minute, acc)| (minute, acc.finish()))
                                    .collect();
                                (champion, minutes)
                            })
                            .collect();
                        (player, champions)
                    })
                    .collect();
                (role, players)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::{MatchId, Side};
    use crate::storage::MatchDataset;

    fn all_matches() -> MatchSelection {
        MatchSelection::new(["G1", "G2", "G3"].map(MatchId::from))
    }

    fn bucket<'a>(
        stats: &'a TimeSeriesStats,
        team: &str,
        side: Side,
        role: Role,
        champion: &str,
        minute: u32,
    ) -> &'a BucketAverages {
        let player = format!("{}-{}", team.to_lowercase(), role.code());
        &stats[team][&side][&role][&player][champion][&minute]
    }

    #[test]
    fn test_lane_differential() {
        let dataset = fixtures::dataset();
        let stats = time_series_stats(&dataset, &all_matches(), RoleFilter::Any);

        let t1 = bucket(&stats, "T1", Side::Blue, Role::Mid, "Azir", 10);
        assert_eq!(t1.gold_diff, Some(400.0));
        assert_eq!(t1.exp_diff, Some(300.0));
        assert_eq!(t1.diff_samples, 1);

        let gen = bucket(&stats, "GEN", Side::Red, Role::Mid, "Orianna", 10);
        assert_eq!(gen.gold_diff, Some(-400.0));
    }

    #[test]
    fn test_differential_undefined_without_opponent() {
        let dataset = fixtures::dataset();
        let stats = time_series_stats(&dataset, &all_matches(), RoleFilter::Any);

        let at_15 = bucket(&stats, "T1", Side::Blue, Role::Mid, "Azir", 15);
        assert_eq!(at_15.gold_diff, None);
        assert_eq!(at_15.exp_diff, None);
        assert_eq!(at_15.diff_samples, 0);
        // raw averages are still reported
        assert_eq!(at_15.samples, 1);
        assert_eq!(at_15.avg_gold, 5600.0);
    }

    #[test]
    fn test_unlinked_samples_count_toward_raw_averages_only() {
        let mut tables = fixtures::tables();
        let mut unlinked = tables.snapshots[0].clone();
        unlinked.match_id = MatchId::from("G2");
        unlinked.opponent = None;
        unlinked.gold = 4000.0;
        tables.snapshots.push(unlinked);
        let dataset = MatchDataset::from_tables(tables);

        let stats = time_series_stats(&dataset, &all_matches(), RoleFilter::Any);
        let t1 = bucket(&stats, "T1", Side::Blue, Role::Mid, "Azir", 10);

        assert_eq!(t1.samples, 2);
        assert_eq!(t1.avg_gold, 3800.0);
        assert_eq!(t1.diff_samples, 1);
        assert_eq!(t1.gold_diff, Some(400.0));
    }

    #[test]
    fn test_groups_by_champion_and_minute() {
        let dataset = fixtures::dataset();
        let stats = time_series_stats(&dataset, &all_matches(), RoleFilter::Any);

        let t1_mid_blue = &stats["T1"][&Side::Blue][&Role::Mid]["t1-mid"]["Azir"];
        assert_eq!(t1_mid_blue.keys().copied().collect::<Vec<_>>(), vec![10, 15]);

        let t1_mid_red = &stats["T1"][&Side::Red][&Role::Mid]["t1-mid"];
        assert!(t1_mid_red.contains_key("Orianna"));
    }

    #[test]
    fn test_role_filter_drops_other_roles() {
        let dataset = fixtures::dataset();
        let stats = time_series_stats(&dataset, &all_matches(), "TOP".parse().unwrap());

        assert_eq!(stats.len(), 1);
        let t1_blue = &stats["T1"][&Side::Blue];
        assert_eq!(t1_blue.keys().copied().collect::<Vec<_>>(), vec![Role::Top]);
    }

    #[test]
    fn test_empty_selection_is_empty() {
        let dataset = fixtures::dataset();
        let stats = time_series_stats(&dataset, &MatchSelection::default(), RoleFilter::Any);
        assert!(stats.is_empty());
    }
}
