//! Category API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::api::extract::ApiJson;
use crate::audit_log;
use crate::auth::AdminIdentity;
use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, normalize_optional, validate_optional_text, validate_required_text,
};

/// GET /api/categories - all categories by name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(state.pool()).await?;
    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminIdentity>,
    ApiJson(payload): ApiJson<CategoryCreate>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload = normalize(payload)?;
    let created = category::create(state.pool(), payload).await?;

    audit_log!(admin.username, "create", format!("category:{}", created.id), &created.name);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/categories/{id} - replace every field
pub async fn update(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    ensure_exists(&state, id).await?;
    let payload = normalize(payload)?;
    let updated = category::update(state.pool(), id, payload).await?;

    audit_log!(admin.username, "update", format!("category:{id}"), &updated.name);
    Ok(Json(updated))
}

/// DELETE /api/categories/{id} - only when no food item uses it
pub async fn delete(
    State(state): State<ServerState>,
    Extension(admin): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_exists(&state, id).await?;

    let items = category::count_items(state.pool(), id).await?;
    if items > 0 {
        return Err(AppError::with_message(
            ErrorCode::CategoryHasItems,
            format!("Category {id} still has {items} food item(s)"),
        )
        .with_detail("item_count", items));
    }

    category::delete(state.pool(), id).await?;

    audit_log!(admin.username, "delete", format!("category:{id}"));
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn ensure_exists(state: &ServerState, id: i64) -> AppResult<()> {
    if !category::exists(state.pool(), id).await? {
        return Err(AppError::with_message(
            ErrorCode::CategoryNotFound,
            format!("Category {id} not found"),
        ));
    }
    Ok(())
}

fn normalize(payload: CategoryCreate) -> AppResult<CategoryCreate> {
    let payload = CategoryCreate {
        name: payload.name.trim().to_string(),
        name_uz: payload.name_uz.trim().to_string(),
        name_ru: payload.name_ru.trim().to_string(),
        description: normalize_optional(payload.description),
    };
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.name_uz, "name_uz", MAX_NAME_LEN)?;
    validate_required_text(&payload.name_ru, "name_ru", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    Ok(payload)
}
