use serde::Serialize;
use sqlx::FromRow;

use super::CafeId;

/// A cafe as read from the catalog. Owned externally; this core never
/// mutates it.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    pub id: CafeId,
    pub name: String,
    pub theme: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub review_count: i32,
}
