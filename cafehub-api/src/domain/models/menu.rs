use serde::Serialize;
use strum::{Display, EnumString};

use super::{CafeId, MenuId};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Coffee,
    Beverage,
    Dessert,
    Brunch,
}

impl From<String> for MenuCategory {
    fn from(category: String) -> Self {
        category.parse().unwrap_or(MenuCategory::Beverage)
    }
}

/// A menu item of a cafe. Read-only from this core's perspective.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub cafe_id: CafeId,
    pub category: MenuCategory,
    pub name: String,
    pub price: String,
    pub best: bool,
}
