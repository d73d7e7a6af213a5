//! Page Route
//!
//! - GET / - The dashboard page

use axum::{body::Bytes, extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;

/// GET /
///
/// Serve the dashboard page rendered at startup.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<Bytes> {
    Html(state.page.clone())
}
