use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::{Cafe, CafeId};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait CafeRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError>;
}

pub struct CafeRepositoryImpl {
    pool: PgPool,
}

impl CafeRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for CafeRepositoryImpl {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError> {
        let cafe = sqlx::query_as::<_, Cafe>(
            r#"
            SELECT id, name, theme, rating, photo_url, review_count
            FROM cafes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cafe)
    }
}
