//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::request::RequestStats};

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Request and equipment counters", body = RequestStats)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<RequestStats>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
