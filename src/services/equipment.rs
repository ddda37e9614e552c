//! Equipment service

use crate::{error::AppResult, models::equipment::Equipment, repository::Repository};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Equipment still in service
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list_active().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }
}
