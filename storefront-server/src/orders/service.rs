//! Order submission pipeline
//!
//! validate → persist (one transaction) → respond → notify in the background

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CreateOrderRequest, Order};
use sqlx::SqlitePool;

use crate::audit_log;
use crate::db::repository::order;
use crate::notify::NotificationRelay;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_SHORT_TEXT_LEN, normalize_optional, validate_optional_text,
    validate_required_text,
};

/// Check an incoming order and return it normalized (trimmed texts, blank optionals dropped)
///
/// Every failure here is a client error.
pub fn validate_order(mut req: CreateOrderRequest) -> AppResult<CreateOrderRequest> {
    if req.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    for (index, line) in req.items.iter().enumerate() {
        if line.quantity < 1 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("quantity must be at least 1 (got {})", line.quantity),
            )
            .with_detail("line", index)
            .with_detail("item_id", line.item_id));
        }
        if line.price < 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("price must not be negative (got {})", line.price),
            )
            .with_detail("line", index)
            .with_detail("item_id", line.item_id));
        }
    }

    req.customer_phone = req.customer_phone.trim().to_string();
    validate_required_text(&req.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;

    req.customer_name = normalize_optional(req.customer_name);
    req.customer_address = normalize_optional(req.customer_address);
    validate_optional_text(&req.customer_name, "customer_name", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.customer_address, "customer_address", MAX_ADDRESS_LEN)?;

    let computed = req.computed_total().ok_or_else(|| {
        AppError::with_message(ErrorCode::ValueOutOfRange, "order total is too large")
    })?;
    if computed != req.total_price {
        return Err(AppError::new(ErrorCode::OrderTotalMismatch)
            .with_detail("total_price", req.total_price)
            .with_detail("computed_total", computed));
    }

    Ok(req)
}

/// Validate, persist and hand the stored order to the notification relay
///
/// The returned order does not depend on the notification outcome.
pub async fn place_order(
    pool: &SqlitePool,
    relay: &NotificationRelay,
    req: CreateOrderRequest,
) -> AppResult<Order> {
    let req = validate_order(req)?;

    let order = order::create(pool, &req).await?;

    audit_log!(
        "public",
        "place",
        format!("order:{}", order.id),
        format!("total={} lines={}", order.total_price, order.items.len())
    );

    relay.spawn(order.clone());

    Ok(order)
}
