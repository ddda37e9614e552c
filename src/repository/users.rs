//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// List users, optionally restricted to one role
    pub async fn list(&self, role: Option<&str>) -> AppResult<Vec<User>> {
        let rows = match role {
            Some(role) => {
                sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = $1 ORDER BY name")
                    .bind(role)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY name")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }
}
