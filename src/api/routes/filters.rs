//! Filter Routes
//!
//! - GET /api/v1/filters - Values and defaults for the filter controls

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FiltersResponse, YearDomain};
use crate::api::state::AppState;
use crate::layout::FilterDefaults;

/// GET /api/v1/filters
///
/// The genre, rating and year domains of the loaded table.
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FiltersResponse> {
    let domains = state.dataset.domains();

    Json(FiltersResponse {
        genres: domains.genres.clone(),
        ratings: domains.ratings.clone(),
        years: YearDomain {
            min: domains.min_year(),
            max: domains.max_year(),
            marks: domains.years.clone(),
        },
        defaults: FilterDefaults::for_domains(domains),
    })
}
