//! Maintenance team endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::team::MaintenanceTeam};

/// List all maintenance teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "Team list", body = Vec<MaintenanceTeam>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceTeam>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}
