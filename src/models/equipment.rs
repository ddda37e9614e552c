//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Equipment name / description
    pub name: String,
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// Team copied onto new requests for this equipment
    pub maintenance_team_id: Option<i32>,
    /// Technician copied onto new requests for this equipment
    pub default_technician_id: Option<i32>,
    /// Set when a request for this equipment reaches the scrap stage.
    /// Scrapped equipment no longer accepts new requests.
    pub is_scrapped: bool,
    pub created_at: DateTime<Utc>,
}
