//! Order Repository
//!
//! An order and its lines are written in one transaction. Each line copies
//! the food item's names at insert time; a line whose item is gone aborts
//! the whole order.

use std::collections::HashMap;

use super::{RepoError, RepoResult, food_item};
use shared::models::{CreateOrderRequest, Order, OrderLine};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const ORDER_COLUMNS: &str =
    "id, total_price, payment_method, customer_name, customer_phone, customer_address, created_at";
const LINE_COLUMNS: &str = "id, order_id, item_id, quantity, price, name, name_uz, name_ru";

/// Persist an already validated order; returns the stored order with lines and items
pub async fn create(pool: &SqlitePool, data: &CreateOrderRequest) -> RepoResult<Order> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO customer_order (id, total_price, payment_method, customer_name, customer_phone, customer_address, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(id)
    .bind(data.total_price)
    .bind(data.payment_method)
    .bind(&data.customer_name)
    .bind(&data.customer_phone)
    .bind(&data.customer_address)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for line in &data.items {
        let rows = sqlx::query(
            "INSERT INTO order_item (order_id, item_id, quantity, price, name, name_uz, name_ru) \
             SELECT ?1, id, ?2, ?3, name, name_uz, name_ru FROM food_item WHERE id = ?4",
        )
        .bind(id)
        .bind(line.quantity)
        .bind(line.price)
        .bind(line.item_id)
        .execute(&mut *tx)
        .await?;
        if rows.rows_affected() == 0 {
            // tx is dropped here, rolling back the order row
            return Err(RepoError::Database(format!(
                "food item {} referenced by order line no longer exists",
                line.item_id
            )));
        }
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// All orders newest first, with lines and referenced items
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let mut orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM customer_order ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    attach_lines(pool, &mut orders).await?;
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM customer_order WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    let Some(order) = order else {
        return Ok(None);
    };
    let mut orders = vec![order];
    attach_lines(pool, &mut orders).await?;
    Ok(orders.pop())
}

async fn attach_lines(pool: &SqlitePool, orders: &mut [Order]) -> RepoResult<()> {
    if orders.is_empty() {
        return Ok(());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
        "SELECT {LINE_COLUMNS} FROM order_item WHERE order_id IN ("
    ));
    let mut separated = qb.separated(", ");
    for order in orders.iter() {
        separated.push_bind(order.id);
    }
    separated.push_unseparated(") ORDER BY order_id, id");
    let lines = qb.build_query_as::<OrderLine>().fetch_all(pool).await?;

    let mut item_ids: Vec<i64> = lines.iter().filter_map(|l| l.item_id).collect();
    item_ids.sort_unstable();
    item_ids.dedup();
    let items = food_item::find_by_ids(pool, &item_ids).await?;

    let mut by_order: HashMap<i64, Vec<OrderLine>> = HashMap::new();
    for mut line in lines {
        line.item = line.item_id.and_then(|id| items.get(&id).cloned());
        by_order.entry(line.order_id).or_default().push(line);
    }
    for order in orders.iter_mut() {
        order.items = by_order.remove(&order.id).unwrap_or_default();
    }
    Ok(())
}
