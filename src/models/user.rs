//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// User record from the directory
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// One of `admin`, `manager`, `technician`, `user`
    pub role: String,
    pub department: Option<String>,
    pub team_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// User listing filters
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserQuery {
    /// Restrict to a single role, e.g. `technician`
    pub role: Option<String>,
}
