//! Maintenance team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maintenance team record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceTeam {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Display color used by the board UI
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}
