//! Food Item API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{FoodItem, FoodItemCreate, FoodItemQuery, FoodItemUpdate};

use crate::api::extract::ApiJson;
use crate::audit_log;
use crate::auth::AdminIdentity;
use crate::core::ServerState;
use crate::db::repository::{category, food_item};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, normalize_optional, validate_optional_text,
    validate_price, validate_required_text,
};

/// GET /api/food-items[?category_id=] - newest first, with category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FoodItemQuery>,
) -> AppResult<Json<Vec<FoodItem>>> {
    let items = food_item::find_all(state.pool(), query.category_id).await?;
    Ok(Json(items))
}

/// GET /api/food-items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FoodItem>> {
    let item = food_item::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// POST /api/food-items - available / not special unless stated
pub async fn create(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminIdentity>,
    ApiJson(payload): ApiJson<FoodItemCreate>,
) -> AppResult<(StatusCode, Json<FoodItem>)> {
    let payload = normalize(payload)?;
    ensure_category(&state, payload.category_id).await?;

    let item = food_item::create(state.pool(), payload).await?;

    audit_log!(
        admin.username,
        "create",
        format!("food_item:{}", item.id),
        format!("{} price={}", item.name, item.price)
    );
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/food-items/{id} - replace every field
pub async fn update(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<FoodItemUpdate>,
) -> AppResult<Json<FoodItem>> {
    let old = food_item::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let payload = normalize(payload)?;
    ensure_category(&state, payload.category_id).await?;

    let item = food_item::update(state.pool(), id, payload).await?;

    audit_log!(
        admin.username,
        "update",
        format!("food_item:{id}"),
        format!("price {} -> {}", old.price, item.price)
    );
    Ok(Json(item))
}

/// DELETE /api/food-items/{id} - order history keeps its snapshot
pub async fn delete(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    if !food_item::delete(state.pool(), id).await? {
        return Err(not_found(id));
    }

    audit_log!(admin.username, "delete", format!("food_item:{id}"));
    Ok(Json(serde_json::json!({ "success": true })))
}

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::FoodItemNotFound, format!("Food item {id} not found"))
}

async fn ensure_category(state: &ServerState, category_id: i64) -> AppResult<()> {
    if !category::exists(state.pool(), category_id).await? {
        return Err(AppError::with_message(
            ErrorCode::CategoryNotFound,
            format!("Category {category_id} not found"),
        )
        .with_detail("category_id", category_id));
    }
    Ok(())
}

fn normalize(payload: FoodItemCreate) -> AppResult<FoodItemCreate> {
    let payload = FoodItemCreate {
        name: payload.name.trim().to_string(),
        name_uz: payload.name_uz.trim().to_string(),
        name_ru: payload.name_ru.trim().to_string(),
        image: normalize_optional(payload.image),
        description: normalize_optional(payload.description),
        ..payload
    };
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.name_uz, "name_uz", MAX_NAME_LEN)?;
    validate_required_text(&payload.name_ru, "name_ru", MAX_NAME_LEN)?;
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_price(payload.price, payload.discounted_price)?;
    Ok(payload)
}
