//! Tower destruction per team, side and lane.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::grouping::{ratio, Mean, TeamSideMap, TeamSideTable};
use crate::models::Lane;
use crate::search::MatchSelection;
use crate::storage::MatchStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TowerSummary {
    pub count: u32,
    pub first_count: u32,
    /// Share of this lane's towers that were the lane's first
    pub first_rate: Option<f64>,
    /// Average game time of the lane's first tower, in seconds
    pub avg_first_time_secs: Option<f64>,
}

#[derive(Debug, Default)]
struct Tally {
    count: u32,
    first_time: Mean,
}

/// Towers destroyed per team, side and lane.
pub fn tower_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
) -> TeamSideMap<BTreeMap<Lane, TowerSummary>> {
    let mut table: TeamSideTable<BTreeMap<Lane, Tally>> = TeamSideTable::new();

    for tower in selection.scope(store.towers()) {
        let tally = table
            .slot(&tower.team, tower.side)
            .entry(tower.lane)
            .or_default();
        tally.count += 1;
        if tower.first {
            tally.first_time.push(tower.time_secs as f64);
        }
    }

    let stats = table.finish(|lanes| {
        lanes
            .into_iter()
            .map(|(lane, t)| {
                let first_count = t.first_time.count();
                let summary = TowerSummary {
                    count: t.count,
                    first_count,
                    first_rate: ratio(first_count as f64, t.count as f64),
                    avg_first_time_secs: t.first_time.value(),
                };
                (lane, summary)
            })
            .collect()
    });
    debug!("Tower stats: {} teams", stats.len());
    stats
}
