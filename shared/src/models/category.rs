//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category with names in every supported language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    /// Default (English) name
    pub name: String,
    pub name_uz: String,
    pub name_ru: String,
    pub description: Option<String>,
    pub created_at: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub name_uz: String,
    pub name_ru: String,
    pub description: Option<String>,
}

/// Update category payload (full replacement)
pub type CategoryUpdate = CategoryCreate;
