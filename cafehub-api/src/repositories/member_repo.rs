use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::{Member, MemberId};

use super::repo_error::RepositoryError;

#[async_trait]
pub trait MemberRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, RepositoryError>;

    async fn update_nickname(
        &self,
        id: MemberId,
        nickname: &str,
    ) -> Result<(), RepositoryError>;

    async fn update_photo_url(
        &self,
        id: MemberId,
        photo_url: &str,
    ) -> Result<(), RepositoryError>;
}

pub struct MemberRepositoryImpl {
    pool: PgPool,
}

impl MemberRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, email, nickname, photo_url
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, RepositoryError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, email, nickname, photo_url
            FROM members
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    async fn update_nickname(
        &self,
        id: MemberId,
        nickname: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET nickname = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(nickname)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("member {id}")));
        }

        Ok(())
    }

    async fn update_photo_url(
        &self,
        id: MemberId,
        photo_url: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET photo_url = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(photo_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("member {id}")));
        }

        Ok(())
    }
}
