//! Pick/ban frequencies per team, side and draft slot.

use std::collections::BTreeMap;

use tracing::debug;

use super::grouping::{TeamSideMap, TeamSideTable};
use crate::models::DraftSlot;
use crate::search::{MatchSelection, RoleFilter};
use crate::storage::MatchStore;

/// Champion → times chosen in a slot.
pub type ChampionCounts = BTreeMap<String, u32>;

/// Team → side → slot → champion → count.
pub type DraftStats = TeamSideMap<BTreeMap<DraftSlot, ChampionCounts>>;

/// Slots counted for a role filter.
///
/// With a role selected only that role's champion slot is counted; bans
/// and ordered picks have no role, so they only appear for `Any`.
fn slots_for(role: RoleFilter) -> Vec<DraftSlot> {
    match role {
        RoleFilter::Any => DraftSlot::all().collect(),
        RoleFilter::Only(role) => vec![DraftSlot::Role(role)],
    }
}

/// Count how often each champion filled each draft slot.
pub fn draft_stats<S: MatchStore + ?Sized>(
    store: &S,
    selection: &MatchSelection,
    role: RoleFilter,
) -> DraftStats {
    let slots = slots_for(role);
    let mut table: TeamSideTable<BTreeMap<DraftSlot, ChampionCounts>> = TeamSideTable::new();
    let mut drafts = 0;

    for draft in selection.scope(store.drafts()) {
        drafts += 1;
        let bucket = table.slot(&draft.team, draft.side);
        for &slot in &slots {
            let champion = draft.champion(slot);
            *bucket
                .entry(slot)
                .or_default()
                .entry(champion.to_string())
                .or_default() += 1;
        }
    }

    debug!("Draft stats: {} drafts, {} slots each", drafts, slots.len());
    table.into_map()
}
