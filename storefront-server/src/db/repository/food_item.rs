//! Food Item Repository

use std::collections::HashMap;

use super::{RepoError, RepoResult, category};
use shared::models::{FoodItem, FoodItemCreate, FoodItemUpdate};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str = "id, name, name_uz, name_ru, price, discounted_price, image, description, \
                       is_available, is_special, category_id, created_at, updated_at";

/// List items newest first, optionally filtered by category, with their category attached
pub async fn find_all(pool: &SqlitePool, category_id: Option<i64>) -> RepoResult<Vec<FoodItem>> {
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM food_item"));
    if let Some(category_id) = category_id {
        qb.push(" WHERE category_id = ").push_bind(category_id);
    }
    qb.push(" ORDER BY created_at DESC, id DESC");

    let mut items = qb.build_query_as::<FoodItem>().fetch_all(pool).await?;
    attach_categories(pool, &mut items).await?;
    Ok(items)
}

/// Single item with its category
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FoodItem>> {
    let item =
        sqlx::query_as::<_, FoodItem>(&format!("SELECT {COLUMNS} FROM food_item WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    let Some(mut item) = item else {
        return Ok(None);
    };
    item.category = category::find_by_id(pool, item.category_id).await?;
    Ok(Some(item))
}

/// Items by id, without category, keyed by id (missing ids are skipped)
pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<HashMap<i64, FoodItem>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let mut qb: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM food_item WHERE id IN ("));
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let items = qb.build_query_as::<FoodItem>().fetch_all(pool).await?;
    Ok(items.into_iter().map(|item| (item.id, item)).collect())
}

async fn attach_categories(pool: &SqlitePool, items: &mut [FoodItem]) -> RepoResult<()> {
    if items.is_empty() {
        return Ok(());
    }
    let categories: HashMap<i64, _> = category::find_all(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
    for item in items.iter_mut() {
        item.category = categories.get(&item.category_id).cloned();
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: FoodItemCreate) -> RepoResult<FoodItem> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO food_item (id, name, name_uz, name_ru, price, discounted_price, image, description, is_available, is_special, category_id, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.name_uz)
    .bind(&data.name_ru)
    .bind(data.price)
    .bind(data.discounted_price)
    .bind(&data.image)
    .bind(&data.description)
    .bind(data.is_available.unwrap_or(true))
    .bind(data.is_special.unwrap_or(false))
    .bind(data.category_id)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create food item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: FoodItemUpdate) -> RepoResult<FoodItem> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE food_item SET name = ?1, name_uz = ?2, name_ru = ?3, price = ?4, discounted_price = ?5, \
         image = ?6, description = ?7, is_available = COALESCE(?8, is_available), \
         is_special = COALESCE(?9, is_special), category_id = ?10, updated_at = ?11 WHERE id = ?12",
    )
    .bind(&data.name)
    .bind(&data.name_uz)
    .bind(&data.name_ru)
    .bind(data.price)
    .bind(data.discounted_price)
    .bind(&data.image)
    .bind(&data.description)
    .bind(data.is_available)
    .bind(data.is_special)
    .bind(data.category_id)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Food item {id} not found")))
}

/// Delete an item; order lines keep their snapshot and lose the reference
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM food_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
