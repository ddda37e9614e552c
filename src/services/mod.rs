//! Business logic services

pub mod equipment;
pub mod requests;
pub mod stats;
pub mod teams;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestsService,
    pub teams: teams::TeamsService,
    pub users: users::UsersService,
    pub stats: stats::StatsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            repository,
        }
    }

    /// Storage liveness, used by the health endpoint
    pub async fn ping_storage(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
