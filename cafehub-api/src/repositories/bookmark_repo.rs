use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::{Bookmark, BookmarkedCafe, CafeId, MemberId};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait BookmarkRepository: Send + Sync + 'static {
    /// All bookmarks of a member, joined to their cafes and projected into
    /// the summary shape.
    async fn find_all_by_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<BookmarkedCafe>, RepositoryError>;

    async fn exists_for(
        &self,
        member_id: MemberId,
        cafe_id: CafeId,
    ) -> Result<bool, RepositoryError>;

    async fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;

    /// Delete the bookmark of the given pair, returning the number of rows
    /// affected. Zero rows is not an error.
    async fn delete_for(
        &self,
        member_id: MemberId,
        cafe_id: CafeId,
    ) -> Result<u64, RepositoryError>;
}

pub struct BookmarkRepositoryImpl {
    pool: PgPool,
}

impl BookmarkRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryImpl {
    async fn find_all_by_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<BookmarkedCafe>, RepositoryError> {
        let cafes = sqlx::query_as::<_, BookmarkedCafe>(
            r#"
            SELECT c.id AS cafe_id,
                   c.name AS cafe_name,
                   c.theme AS cafe_theme,
                   c.rating AS cafe_rating,
                   c.photo_url AS cafe_photo_url,
                   c.review_count AS cafe_review_num
            FROM bookmarks b
            JOIN cafes c ON c.id = b.cafe_id
            WHERE b.member_id = $1
            ORDER BY b.id
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cafes)
    }

    async fn exists_for(
        &self,
        member_id: MemberId,
        cafe_id: CafeId,
    ) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookmarks
                WHERE member_id = $1 AND cafe_id = $2
            )
            "#,
        )
        .bind(member_id)
        .bind(cafe_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        // The unique constraint on (member_id, cafe_id) makes concurrent
        // duplicate saves collapse into a no-op.
        sqlx::query(
            r#"
            INSERT INTO bookmarks (member_id, cafe_id)
            VALUES ($1, $2)
            ON CONFLICT (member_id, cafe_id) DO NOTHING
            "#,
        )
        .bind(bookmark.member_id)
        .bind(bookmark.cafe_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_for(
        &self,
        member_id: MemberId,
        cafe_id: CafeId,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
            WHERE member_id = $1 AND cafe_id = $2
            "#,
        )
        .bind(member_id)
        .bind(cafe_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
