//! Figure Routes
//!
//! The dashboard's three outputs. Each takes the current filter and is
//! recomputed independently from the shared table.
//!
//! - POST /api/v1/figures/scatter - Score scatter figure
//! - POST /api/v1/figures/area - Releases stacked-area figure
//! - POST /api/v1/count - Number of matching games

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use plotly::Plot;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::charts::{area_figure, games_count, scatter_figure, GamesCount};
use crate::dataset::FilterParams;

/// POST /api/v1/figures/scatter
pub async fn scatter(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FilterParams>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(params) = payload?;
    let view = state.dataset.filter(&params);
    log_filter("scatter", &params, view.len());

    Ok(figure_response(scatter_figure(&view)))
}

/// POST /api/v1/figures/area
pub async fn area(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FilterParams>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(params) = payload?;
    let view = state.dataset.filter(&params);
    log_filter("area", &params, view.len());

    Ok(figure_response(area_figure(&view)))
}

/// POST /api/v1/count
pub async fn count(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FilterParams>, JsonRejection>,
) -> ApiResult<Json<GamesCount>> {
    let Json(params) = payload?;
    let view = state.dataset.filter(&params);
    log_filter("count", &params, view.len());

    Ok(Json(games_count(&view)))
}

fn log_filter(output: &str, params: &FilterParams, matched: usize) {
    tracing::debug!(
        output,
        genres = params.genres.len(),
        ratings = params.ratings.len(),
        years = ?params.years,
        matched,
        "Filter applied"
    );
}

/// Plotly figures serialize themselves, so send the JSON as-is
fn figure_response(plot: Plot) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        plot.to_json(),
    )
        .into_response()
}
