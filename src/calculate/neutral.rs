//! Neutral objective control: drakes, rift heralds and barons.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::grouping::{Mean, TeamSideMap, TeamSideTable};
use crate::models::DrakeKind;
use crate::search::MatchSelection;
use crate::storage::MatchStore;

/// Drake control for one team/side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrakeSummary {
    pub total: u32,
    pub by_kind: BTreeMap<DrakeKind, u32>,
    pub first_count: u32,
    pub first_by_kind: BTreeMap<DrakeKind, u32>,
    /// Average game time of the first drake, in seconds
    pub avg_first_time_secs: Option<f64>,
}

/// Control of a neutral objective without sub-types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveSummary {
    pub total: u32,
    pub first_count: u32,
    /// Average game time of the first take, in seconds
    pub avg_first_time_secs: Option<f64>,
}

#[derive(Debug, Default)]
struct Tally {
    total: u32,
    first_time: Mean,
}

impl Tally {
    fn push(&mut self, first: bool, time_secs: u32) {
        self.total += 1;
        if first {
            self.first_time.push(time_secs as f64);
        }
    }

    fn finish(&self) -> ObjectiveSummary {
        ObjectiveSummary {
            total: self.total,
            first_count: self.first_time.count(),
            avg_first_time_secs: self.first_time.value(),
        }
    }
}

#[derive(Debug, Default)]
struct DrakeTally {
    tally: Tally,
    by_kind: BTreeMap<DrakeKind, u32>,
    first_by_kind: BTreeMap<DrakeKind, u32>,
}

/// Drakes taken per team and side, by elemental type.
pub fn drake_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
) -> TeamSideMap<DrakeSummary> {
    let mut table: TeamSideTable<DrakeTally> = TeamSideTable::new();

    for drake in selection.scope(store.drakes()) {
        let bucket = table.slot(&drake.team, drake.side);
        bucket.tally.push(drake.first, drake.time_secs);
        *bucket.by_kind.entry(drake.kind).or_default() += 1;
        if drake.first {
            *bucket.first_by_kind.entry(drake.kind).or_default() += 1;
        }
    }

    let stats = table.finish(|t| {
        let summary = t.tally.finish();
        DrakeSummary {
            total: summary.total,
            by_kind: t.by_kind,
            first_count: summary.first_count,
            first_by_kind: t.first_by_kind,
            avg_first_time_secs: summary.avg_first_time_secs,
        }
    });
    debug!("Drake stats: {} teams", stats.len());
    stats
}

/// Rift heralds taken per team and side.
pub fn herald_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
) -> TeamSideMap<ObjectiveSummary> {
    let mut table: TeamSideTable<Tally> = TeamSideTable::new();
    for herald in selection.scope(store.heralds()) {
        table
            .slot(&herald.team, herald.side)
            .push(herald.first, herald.time_secs);
    }

    let stats = table.finish(|t| t.finish());
    debug!("Herald stats: {} teams", stats.len());
    stats
}

/// Barons taken per team and side.
pub fn baron_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
) -> TeamSideMap<ObjectiveSummary> {
    let mut table: TeamSideTable<Tally> = TeamSideTable::new();
    for baron in selection.scope(store.barons()) {
        table
            .slot(&baron.team, baron.side)
            .push(baron.first, baron.time_secs);
    }

    let stats = table.finish(|t| t.finish());
    debug!("Baron stats: {} teams", stats.len());
    stats
}
