//! Match search: resolves search criteria to the set of matches to aggregate.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::models::{MatchId, MatchScoped, Role};
use crate::storage::MatchStore;

/// Search validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid role filter '{0}': expected any, top, jungle, mid, bot or support")]
    InvalidRole(String),
}

/// Which role's rows to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    Any,
    Only(Role),
}

impl RoleFilter {
    pub fn accepts(self, role: Role) -> bool {
        match self {
            RoleFilter::Any => true,
            RoleFilter::Only(wanted) => wanted == role,
        }
    }
}

impl FromStr for RoleFilter {
    type Err = SearchError;

    /// Case-insensitive. Empty input means any role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(RoleFilter::Any);
        }
        trimmed
            .parse::<Role>()
            .map(RoleFilter::Only)
            .map_err(|_| SearchError::InvalidRole(s.to_string()))
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::Any => write!(f, "any"),
            RoleFilter::Only(role) => write!(f, "{}", role),
        }
    }
}

impl Serialize for RoleFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Search criteria. Every present filter must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub patch: Option<String>,
    pub competition: Option<String>,
    pub team: Option<String>,
    pub role: RoleFilter,
    pub player: Option<String>,
}

/// Unvalidated search parameters, as received from the CLI or a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub patch: Option<String>,
    pub competition: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub player: Option<String>,
}

impl SearchParams {
    /// Validate into criteria. Blank filters are dropped.
    pub fn into_criteria(self) -> Result<SearchCriteria, SearchError> {
        let role = match self.role.as_deref() {
            Some(role) => role.parse()?,
            None => RoleFilter::Any,
        };

        Ok(SearchCriteria {
            patch: non_blank(self.patch),
            competition: non_blank(self.competition),
            team: non_blank(self.team),
            role,
            player: non_blank(self.player),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Ordered, duplicate-free set of matches selected by a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSelection {
    ids: Vec<MatchId>,
    lookup: HashSet<MatchId>,
}

impl MatchSelection {
    pub fn new(ids: impl IntoIterator<Item = MatchId>) -> Self {
        let mut selection = Self::default();
        for id in ids {
            if selection.lookup.insert(id.clone()) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn ids(&self) -> &[MatchId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &MatchId) -> bool {
        self.lookup.contains(id)
    }

    /// Records belonging to a selected match.
    pub fn scope<'a, T: MatchScoped>(&'a self, records: &'a [T]) -> impl Iterator<Item = &'a T> {
        records.iter().filter(move |r| self.contains(r.match_id()))
    }
}

/// Select the matches satisfying `criteria`, in dataset order.
///
/// The role filter does not narrow the match set; it only applies to the
/// per-role aggregations.
pub fn select_matches<S: MatchStore + ?Sized>(store: &S, criteria: &SearchCriteria) -> MatchSelection {
    let selection = MatchSelection::new(
        store
            .matches()
            .iter()
            .filter(|m| criteria.patch.as_ref().map_or(true, |p| &m.patch == p))
            .filter(|m| {
                criteria
                    .competition
                    .as_ref()
                    .map_or(true, |c| m.competition.contains(c.as_str()))
            })
            .filter(|m| criteria.team.as_ref().map_or(true, |t| m.has_team(t)))
            .filter(|m| {
                criteria
                    .player
                    .as_ref()
                    .map_or(true, |p| m.lineup.contains(p))
            })
            .map(|m| m.id.clone()),
    );

    debug!(
        "Search {:?} selected {} of {} matches",
        criteria,
        selection.len(),
        store.matches().len()
    );
    selection
}

/// Distinct filter values present in the data, for building search forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    pub patches: Vec<String>,
    pub competitions: Vec<String>,
    pub teams: Vec<String>,
    pub players: Vec<String>,
    pub roles: Vec<Role>,
}

/// Collect the sorted, distinct patches, competitions, teams and lineup
/// players of every stored match.
pub fn search_options<S: MatchStore + ?Sized>(store: &S) -> SearchOptions {
    let mut patches = BTreeSet::new();
    let mut competitions = BTreeSet::new();
    let mut teams = BTreeSet::new();
    let mut players = BTreeSet::new();

    for m in store.matches() {
        patches.insert(m.patch.as_str());
        competitions.insert(m.competition.as_str());
        teams.insert(m.blue_team.as_str());
        teams.insert(m.red_team.as_str());
        for (_, player) in m.lineup.blue.iter().chain(m.lineup.red.iter()) {
            players.insert(player.as_str());
        }
    }

    let owned = |set: BTreeSet<&str>| -> Vec<String> { set.into_iter().map(str::to_string).collect() };
    SearchOptions {
        patches: owned(patches),
        competitions: owned(competitions),
        teams: owned(teams),
        players: owned(players),
        roles: Role::ALL.to_vec(),
    }
}
