//! Input validation helpers
//!
//! Text length limits and checks shared by the catalog handlers and the
//! order pipeline. SQLite TEXT has no built-in length enforcement.

use shared::error::{AppError, ErrorCode};

/// Item and category names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers, customer names
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Catalog price pair: price >= 0 and, when set, 0 <= discounted < price
pub fn validate_price(price: i64, discounted_price: Option<i64>) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::with_message(
            ErrorCode::FoodItemInvalidPrice,
            format!("price must not be negative (got {price})"),
        ));
    }
    if let Some(discounted) = discounted_price
        && (discounted < 0 || discounted >= price)
    {
        return Err(AppError::with_message(
            ErrorCode::FoodItemInvalidPrice,
            format!("discounted_price must be between 0 and price (got {discounted}, price {price})"),
        ));
    }
    Ok(())
}

/// Trim a text field; blank becomes `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
