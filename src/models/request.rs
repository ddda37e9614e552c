//! Maintenance request model and projections

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{RequestType, Stage};

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: i32,
    pub subject: String,
    #[sqlx(try_from = "String")]
    pub request_type: RequestType,
    pub equipment_id: i32,
    /// Copied from the equipment at creation, never taken from the caller
    pub maintenance_team_id: Option<i32>,
    /// Copied from the equipment at creation, never taken from the caller
    pub assigned_technician_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub stage: Stage,
    /// Hours spent, recorded by completion. Always positive when present.
    pub duration_hours: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Create maintenance request payload.
///
/// Team and technician assignments come from the equipment defaults;
/// any values a caller sends for them are not part of this contract.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: Option<String>,
    /// Defaults to `corrective`
    pub request_type: Option<RequestType>,
    pub equipment_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
}

/// Update stage request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStage {
    /// One of `new`, `in_progress`, `repaired`, `scrap`
    pub stage: Option<String>,
}

/// Complete request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteRequest {
    /// Hours spent on the work, must be positive
    pub duration_hours: Option<Decimal>,
}

/// Kanban card: a request row joined with the technician display name.
///
/// `stage` is carried exactly as stored; bucketing happens separately so a
/// null or unexpected value in storage never breaks the board.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct KanbanCard {
    pub id: i32,
    pub subject: String,
    pub request_type: String,
    pub equipment_id: i32,
    pub maintenance_team_id: Option<i32>,
    pub assigned_technician_id: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub stage: Option<String>,
    pub duration_hours: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    /// Resolved from users, absent when nobody is assigned
    pub technician: Option<String>,
}

/// Kanban board with one bucket per stage, all four always present
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct KanbanBoard {
    pub new: Vec<KanbanCard>,
    pub in_progress: Vec<KanbanCard>,
    pub repaired: Vec<KanbanCard>,
    pub scrap: Vec<KanbanCard>,
}

/// Calendar entry for a scheduled preventive request
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CalendarEntry {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
}

/// Summary counters for the reporting dashboard
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestStats {
    pub total_requests: i64,
    pub new: i64,
    pub in_progress: i64,
    pub repaired: i64,
    pub scrap: i64,
    /// Requests still waiting on work, new plus in_progress
    pub open: i64,
    /// Scheduled in the past and not yet repaired or scrapped
    pub overdue: i64,
    pub equipment_total: i64,
    pub equipment_active: i64,
    pub equipment_scrapped: i64,
}
