//! Maintenance teams service

use crate::{error::AppResult, models::team::MaintenanceTeam, repository::Repository};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceTeam>> {
        self.repository.teams.list().await
    }
}
