//! Maintenance teams repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::team::MaintenanceTeam};

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all maintenance teams
    pub async fn list(&self) -> AppResult<Vec<MaintenanceTeam>> {
        let rows = sqlx::query_as::<_, MaintenanceTeam>(
            "SELECT * FROM maintenance_teams ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
