//! Report assembly: every aggregation over one match selection.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use super::draft::{draft_stats, DraftStats};
use super::end_game::{end_game_stats, EndGameStats};
use super::first_blood::{first_blood_stats, FirstBloodSummary};
use super::grouping::TeamSideMap;
use super::neutral::{baron_stats, drake_stats, herald_stats, DrakeSummary, ObjectiveSummary};
use super::plates::{plate_stats, PlateSummary};
use super::time_series::{time_series_stats, TimeSeriesStats};
use super::towers::{tower_stats, TowerSummary};
use crate::models::Lane;
use crate::search::{select_matches, MatchSelection, SearchCriteria};
use crate::storage::MatchStore;

/// The combined statistics for one search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub search_criteria: SearchCriteria,
    pub draft: DraftStats,
    pub end_game: EndGameStats,
    pub time_series: TimeSeriesStats,
    pub drakes: TeamSideMap<DrakeSummary>,
    pub heralds: TeamSideMap<ObjectiveSummary>,
    pub barons: TeamSideMap<ObjectiveSummary>,
    pub first_blood: TeamSideMap<FirstBloodSummary>,
    pub towers: TeamSideMap<BTreeMap<Lane, TowerSummary>>,
    pub plates: TeamSideMap<PlateSummary>,
}

/// Run every aggregation over `selection`.
///
/// The criteria's role filter is applied to the per-role sections; the
/// criteria themselves are echoed back unchanged.
pub fn assemble<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
    criteria: &SearchCriteria,
) -> Report {
    let role = criteria.role;
    let report = Report {
        search_criteria: criteria.clone(),
        draft: draft_stats(store, selection, role),
        end_game: end_game_stats(store, selection, role),
        time_series: time_series_stats(store, selection, role),
        drakes: drake_stats(store, selection),
        heralds: herald_stats(store, selection),
        barons: baron_stats(store, selection),
        first_blood: first_blood_stats(store, selection),
        towers: tower_stats(store, selection),
        plates: plate_stats(store, selection),
    };
    info!(
        "Assembled report over {} matches (role: {})",
        selection.len(),
        role
    );
    report
}

/// Select matches for `criteria` and assemble their report.
pub fn run_search<S: MatchStore + ?Sized>(store: &S, criteria: &SearchCriteria) -> Report {
    let selection = select_matches(store, criteria);
    assemble(store, &selection, criteria)
}
