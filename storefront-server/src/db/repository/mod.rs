//! Repository Module
//!
//! Free functions over `&SqlitePool`, one module per table group.

pub mod admin;
pub mod category;
pub mod food_item;
pub mod order;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => {
                // Cause stays in the log; clients get the generic message
                tracing::error!(error = %msg, "Repository error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use shared::models::{Category, CategoryCreate, FoodItem, FoodItemCreate};
    use sqlx::SqlitePool;

    pub async fn pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    pub async fn category(pool: &SqlitePool, name: &str) -> Category {
        super::category::create(
            pool,
            CategoryCreate {
                name: name.into(),
                name_uz: format!("{name} uz"),
                name_ru: format!("{name} ru"),
                description: None,
            },
        )
        .await
        .unwrap()
    }

    pub async fn food_item(
        pool: &SqlitePool,
        category_id: i64,
        name: &str,
        price: i64,
        discounted_price: Option<i64>,
    ) -> FoodItem {
        super::food_item::create(
            pool,
            FoodItemCreate {
                name: name.into(),
                name_uz: format!("{name} uz"),
                name_ru: format!("{name} ru"),
                price,
                discounted_price,
                category_id,
                image: None,
                description: None,
                is_available: None,
                is_special: None,
            },
        )
        .await
        .unwrap()
    }
}
