use async_trait::async_trait;

use crate::domain::{
    models::{BookmarkedCafe, CafeId, Credential},
    BookmarkError,
};

#[async_trait]
pub trait BookmarkService: Send + Sync + 'static {
    /// All cafes the acting member has bookmarked, as summary projections.
    /// Members without bookmarks get an empty list, never an error.
    async fn list_bookmarks(
        &self,
        credential: &Credential,
    ) -> Result<Vec<BookmarkedCafe>, BookmarkError>;

    /// Bookmark a cafe for the acting member. Bookmarking an already
    /// bookmarked cafe is an idempotent success returning the same id.
    async fn add_bookmark(
        &self,
        credential: &Credential,
        cafe_id: CafeId,
    ) -> Result<CafeId, BookmarkError>;

    /// Remove the acting member's bookmark of a cafe. Removing a bookmark
    /// that does not exist is a silent success.
    async fn remove_bookmark(
        &self,
        credential: &Credential,
        cafe_id: CafeId,
    ) -> Result<CafeId, BookmarkError>;
}
