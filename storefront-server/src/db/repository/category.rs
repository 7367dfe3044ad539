//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, name_uz, name_ru, description, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(&format!(
        "SELECT {COLUMNS} FROM category ORDER BY name COLLATE NOCASE, id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM category WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(category)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM category WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO category (id, name, name_uz, name_ru, description, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.name_uz)
    .bind(&data.name_ru)
    .bind(&data.description)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    let rows = sqlx::query(
        "UPDATE category SET name = ?1, name_uz = ?2, name_ru = ?3, description = ?4 WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.name_uz)
    .bind(&data.name_ru)
    .bind(&data.description)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

/// Number of food items filed under the category
pub async fn count_items(pool: &SqlitePool, id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_item WHERE category_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Delete a category; `false` when it did not exist
///
/// Items still filed under it make the foreign key reject the delete.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    #[tokio::test]
    async fn test_create_and_list_by_name() {
        let pool = test_support::pool().await;
        test_support::category(&pool, "Sides").await;
        test_support::category(&pool, "burgers").await;
        test_support::category(&pool, "Drinks").await;

        let names: Vec<String> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["burgers", "Drinks", "Sides"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let pool = test_support::pool().await;
        let created = test_support::category(&pool, "Hotdogs").await;

        let updated = update(
            &pool,
            created.id,
            CategoryUpdate {
                name: "Hot dogs".into(),
                name_uz: "Hotdoglar".into(),
                name_ru: "Хотдоги".into(),
                description: Some("grill".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name_ru, "Хотдоги");
        assert_eq!(updated.description.as_deref(), Some("grill"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_support::pool().await;
        let err = update(
            &pool,
            404,
            CategoryUpdate {
                name: "x".into(),
                name_uz: "x".into(),
                name_ru: "x".into(),
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_refuses_non_empty_category() {
        let pool = test_support::pool().await;
        let category = test_support::category(&pool, "Drinks").await;
        let item = test_support::food_item(&pool, category.id, "Cola", 5000, None).await;

        assert_eq!(count_items(&pool, category.id).await.unwrap(), 1);
        assert!(matches!(
            delete(&pool, category.id).await,
            Err(RepoError::Database(_))
        ));
        assert!(exists(&pool, category.id).await.unwrap());

        crate::db::repository::food_item::delete(&pool, item.id)
            .await
            .unwrap();
        assert!(delete(&pool, category.id).await.unwrap());
        assert!(!delete(&pool, category.id).await.unwrap());
        assert!(!exists(&pool, category.id).await.unwrap());
    }
}
