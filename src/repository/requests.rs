//! Maintenance requests repository for database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RequestType, Stage},
        request::{CalendarEntry, KanbanCard, MaintenanceRequest},
    },
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new request with team and technician copied from the
    /// equipment defaults. The scrapped check, the defaults lookup and the
    /// insert run as one statement so they see a single consistent snapshot;
    /// zero rows means the equipment is missing or already scrapped.
    pub async fn create_for_equipment(
        &self,
        subject: &str,
        request_type: RequestType,
        equipment_id: i32,
        scheduled_date: Option<NaiveDate>,
    ) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO maintenance_requests
                (subject, request_type, equipment_id,
                 maintenance_team_id, assigned_technician_id, scheduled_date, stage)
            SELECT $1, $2, e.id, e.maintenance_team_id, e.default_technician_id, $4, $5
            FROM equipment e
            WHERE e.id = $3 AND e.is_scrapped = FALSE
            RETURNING id
            "#,
        )
        .bind(subject)
        .bind(request_type.as_str())
        .bind(equipment_id)
        .bind(scheduled_date)
        .bind(Stage::New.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::InvalidEquipment("Invalid or scrapped equipment".to_string()))
    }

    /// Move a request to the given stage. Entering `scrap` also retires the
    /// equipment; both writes commit together or not at all. A missing
    /// request id updates nothing and is not an error.
    pub async fn set_stage(&self, id: i32, stage: Stage) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE maintenance_requests SET stage = $1 WHERE id = $2")
            .bind(stage.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if stage == Stage::Scrap {
            sqlx::query(
                r#"
                UPDATE equipment
                SET is_scrapped = TRUE
                WHERE id = (
                    SELECT equipment_id
                    FROM maintenance_requests
                    WHERE id = $1
                )
                "#,
            )
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Record the hours spent and force the repaired stage. Completing does
    /// not touch the equipment, even if the request was sitting in scrap.
    pub async fn complete(&self, id: i32, duration_hours: Decimal) -> AppResult<()> {
        sqlx::query(
            "UPDATE maintenance_requests SET stage = $1, duration_hours = $2 WHERE id = $3",
        )
        .bind(Stage::Repaired.as_str())
        .bind(duration_hours)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All requests joined with the technician display name, in id order
    pub async fn kanban_rows(&self) -> AppResult<Vec<KanbanCard>> {
        let rows = sqlx::query_as::<_, KanbanCard>(
            r#"
            SELECT r.id, r.subject, r.request_type, r.equipment_id,
                   r.maintenance_team_id, r.assigned_technician_id,
                   r.scheduled_date, r.stage, r.duration_hours, r.created_at,
                   u.name AS technician
            FROM maintenance_requests r
            LEFT JOIN users u ON r.assigned_technician_id = u.id
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Scheduled preventive work, earliest first
    pub async fn calendar(&self) -> AppResult<Vec<CalendarEntry>> {
        let rows = sqlx::query_as::<_, CalendarEntry>(
            r#"
            SELECT id, subject AS title, scheduled_date AS date
            FROM maintenance_requests
            WHERE request_type = $1 AND scheduled_date IS NOT NULL
            ORDER BY scheduled_date, id
            "#,
        )
        .bind(RequestType::Preventive.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Requests for a piece of equipment, scrapped ones included
    pub async fn list_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE equipment_id = $1 ORDER BY id",
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Requests assigned to a technician
    pub async fn list_by_technician(&self, technician_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE assigned_technician_id = $1 ORDER BY id",
        )
        .bind(technician_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count_total(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM maintenance_requests")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn count_in_stage(&self, stage: Stage) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM maintenance_requests WHERE stage = $1",
        )
        .bind(stage.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Requests scheduled in the past that are neither repaired nor scrapped
    pub async fn count_overdue(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE scheduled_date < CURRENT_DATE
              AND stage NOT IN ($1, $2)
            "#,
        )
        .bind(Stage::Repaired.as_str())
        .bind(Stage::Scrap.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
