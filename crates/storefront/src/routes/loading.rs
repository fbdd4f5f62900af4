//! Loading gate progress endpoint.
//!
//! Polled by the loading screen to animate the progress bar and detect
//! when the gate has opened.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Progress snapshot returned to the loading screen.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: f64,
    pub is_loading: bool,
}

/// Report the current loading gate progress.
pub async fn progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    Json(ProgressResponse {
        progress: state.loading().progress(),
        is_loading: state.loading().is_loading(),
    })
}
