//! Statistics service

use crate::{
    error::AppResult,
    models::{enums::Stage, request::RequestStats},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Summary counters for the dashboard
    pub async fn get_stats(&self) -> AppResult<RequestStats> {
        let requests = &self.repository.requests;

        let new = requests.count_in_stage(Stage::New).await?;
        let in_progress = requests.count_in_stage(Stage::InProgress).await?;
        let equipment_total = self.repository.equipment.count_total().await?;
        let equipment_scrapped = self.repository.equipment.count_scrapped().await?;

        Ok(RequestStats {
            total_requests: requests.count_total().await?,
            new,
            in_progress,
            repaired: requests.count_in_stage(Stage::Repaired).await?,
            scrap: requests.count_in_stage(Stage::Scrap).await?,
            open: new + in_progress,
            overdue: requests.count_overdue().await?,
            equipment_total,
            equipment_active: equipment_total - equipment_scrapped,
            equipment_scrapped,
        })
    }
}
