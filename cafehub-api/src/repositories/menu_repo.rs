use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::models::{CafeId, Menu, MenuId};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait MenuRepository: Send + Sync + 'static {
    async fn find_all_by_cafe(&self, cafe_id: CafeId) -> Result<Vec<Menu>, RepositoryError>;
}

pub struct MenuRepositoryImpl {
    pool: PgPool,
}

impl MenuRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// The category column is plain TEXT; decode through a row struct and map
// into the domain enum.
#[derive(FromRow)]
struct MenuRow {
    id: MenuId,
    cafe_id: CafeId,
    category: String,
    name: String,
    price: String,
    best: bool,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            cafe_id: row.cafe_id,
            category: row.category.into(),
            name: row.name,
            price: row.price,
            best: row.best,
        }
    }
}

#[async_trait]
impl MenuRepository for MenuRepositoryImpl {
    async fn find_all_by_cafe(&self, cafe_id: CafeId) -> Result<Vec<Menu>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuRow>(
            r#"
            SELECT id, cafe_id, category, name, price, best
            FROM menus
            WHERE cafe_id = $1
            ORDER BY id
            "#,
        )
        .bind(cafe_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }
}
