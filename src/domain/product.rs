//! Product domain entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product domain entity.
///
/// The identifier and `created_at` are assigned once at creation and never
/// change; `updated_at` is refreshed on every mutation. Names carry no
/// uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Product name
    #[schema(example = "Widget")]
    pub name: String,
    /// Product description
    #[schema(example = "A standard widget")]
    pub description: String,
    /// Unit price (non-negative)
    #[schema(value_type = String, example = "99.99")]
    pub price: Decimal,
    /// Stock quantity (non-negative)
    #[schema(example = 10)]
    pub quantity: i32,
    /// Creation timestamp (set once)
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

/// Mutable product fields, used for both creation and full-replacement
/// updates. An update overwrites every field here even when the caller
/// meant to leave one unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}
