use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{run_search, Report};
use crate::models::MatchId;
use crate::search::{search_options, select_matches, SearchOptions, SearchParams};

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchId>,
    pub count: usize,
}

/// Ids of the matches the search parameters select.
pub async fn matches(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let criteria = params.into_criteria()?;
    let selection = select_matches(state.dataset.as_ref(), &criteria);

    Ok(Json(MatchesResponse {
        count: selection.len(),
        matches: selection.ids().to_vec(),
    }))
}

/// Full statistics report for the search parameters.
pub async fn report(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Report>, ApiError> {
    let criteria = params.into_criteria()?;
    Ok(Json(run_search(state.dataset.as_ref(), &criteria)))
}

/// Distinct filter values for search forms.
pub async fn options(State(state): State<AppState>) -> Json<SearchOptions> {
    Json(search_options(state.dataset.as_ref()))
}
