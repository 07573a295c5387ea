//! First blood rate and timing per team and side.

use serde::Serialize;
use tracing::debug;

use super::grouping::{percentage, Mean, TeamSideMap, TeamSideTable};
use crate::search::MatchSelection;
use crate::storage::MatchStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstBloodSummary {
    pub count: u32,
    /// Share of all selected matches, in percent
    pub rate: Option<f64>,
    /// Average game time of first blood, in seconds
    pub avg_time_secs: Option<f64>,
}

/// First bloods per team and side.
///
/// The rate is taken over every selected match, not only those the team
/// played on that side. Team/sides that never drew first blood get no entry.
pub fn first_blood_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
) -> TeamSideMap<FirstBloodSummary> {
    let mut table: TeamSideTable<Mean> = TeamSideTable::new();
    for event in selection.scope(store.first_bloods()) {
        table
            .slot(&event.team, event.side)
            .push(event.time_secs as f64);
    }

    let total = selection.len();
    let stats = table.finish(|times| FirstBloodSummary {
        count: times.count(),
        rate: percentage(times.count(), total),
        avg_time_secs: times.value(),
    });
    debug!("First blood stats: {} teams over {} matches", stats.len(), total);
    stats
}
