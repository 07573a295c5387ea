//! Turret plates destroyed per game.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::grouping::{ratio, TeamSideMap, TeamSideTable};
use crate::models::Lane;
use crate::search::MatchSelection;
use crate::storage::MatchStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanePlates {
    pub count: u32,
    pub per_game: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateSummary {
    pub lanes: BTreeMap<Lane, LanePlates>,
    pub count: u32,
    pub per_game: Option<f64>,
}

/// Plates destroyed per team, side and lane, averaged over every selected
/// match.
pub fn plate_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
) -> TeamSideMap<PlateSummary> {
    let mut table: TeamSideTable<BTreeMap<Lane, u32>> = TeamSideTable::new();
    for plate in selection.scope(store.plates()) {
        *table
            .slot(&plate.team, plate.side)
            .entry(plate.lane)
            .or_default() += 1;
    }

    let games = selection.len() as f64;
    let stats = table.finish(|lanes| {
        let count = lanes.values().sum::<u32>();
        let lanes = lanes
            .into_iter()
            .map(|(lane, count)| {
                let plates = LanePlates {
                    count,
                    per_game: ratio(count as f64, games),
                };
                (lane, plates)
            })
            .collect();
        PlateSummary {
            lanes,
            count,
            per_game: ratio(count as f64, games),
        }
    });
    debug!("Plate stats: {} teams over {} matches", stats.len(), games);
    stats
}
