//! Food Item Model

use super::amount;
use super::category::Category;
use serde::{Deserialize, Serialize};

/// Menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub name_uz: String,
    pub name_ru: String,
    /// Regular price in so'm
    pub price: i64,
    /// Promotional price; wins over `price` when set
    pub discounted_price: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub is_available: bool,
    pub is_special: bool,
    pub category_id: i64,
    pub created_at: i64,
    pub updated_at: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    /// Owning category
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl FoodItem {
    /// Unit price a customer pays right now
    pub fn effective_price(&self) -> i64 {
        self.discounted_price.unwrap_or(self.price)
    }
}

/// Create food item payload
///
/// Prices accept numbers or numeric strings; an empty discounted price is
/// treated as absent. Flags default to available / not special on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemCreate {
    pub name: String,
    pub name_uz: String,
    pub name_ru: String,
    #[serde(deserialize_with = "amount::required")]
    pub price: i64,
    #[serde(default, deserialize_with = "amount::optional")]
    pub discounted_price: Option<i64>,
    pub category_id: i64,
    pub image: Option<String>,
    pub description: Option<String>,
    /// Defaults to `true`
    pub is_available: Option<bool>,
    /// Defaults to `false`
    pub is_special: Option<bool>,
}

/// Update food item payload (full replacement; the two flags keep their
/// stored value when omitted)
pub type FoodItemUpdate = FoodItemCreate;

/// Query string of the food item listing (`?category_id=` or
/// `?categoryId=`; empty means all)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodItemQuery {
    #[serde(default, alias = "categoryId", deserialize_with = "amount::optional")]
    pub category_id: Option<i64>,
}
