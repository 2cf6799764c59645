use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::{
        models::{Bookmark, BookmarkedCafe, CafeId, Credential},
        ports::{inbound::BookmarkService, outbound::AuthResolver},
        BookmarkError,
    },
    repositories::{BookmarkRepository, CafeRepository},
};

/// Implementation of the BookmarkService inbound port.
///
/// Maintains the member↔cafe bookmark relation with at most one bookmark
/// per pair. The acting member always comes from the resolved credential,
/// never from the request body.
pub struct BookmarkServiceImpl<A, B, C> {
    auth: Arc<A>,
    bookmarks: Arc<B>,
    cafes: Arc<C>,
}

impl<A, B, C> BookmarkServiceImpl<A, B, C> {
    pub fn new(auth: Arc<A>, bookmarks: Arc<B>, cafes: Arc<C>) -> Self {
        Self {
            auth,
            bookmarks,
            cafes,
        }
    }
}

#[async_trait]
impl<A: AuthResolver, B: BookmarkRepository, C: CafeRepository> BookmarkService
    for BookmarkServiceImpl<A, B, C>
{
    async fn list_bookmarks(
        &self,
        credential: &Credential,
    ) -> Result<Vec<BookmarkedCafe>, BookmarkError> {
        let member = self.auth.resolve(credential).await?;

        let cafes = self.bookmarks.find_all_by_member(member.id).await?;

        Ok(cafes)
    }

    async fn add_bookmark(
        &self,
        credential: &Credential,
        cafe_id: CafeId,
    ) -> Result<CafeId, BookmarkError> {
        let cafe = self
            .cafes
            .find_by_id(cafe_id)
            .await?
            .ok_or(BookmarkError::CafeNotFound(cafe_id))?;
        let member = self.auth.resolve(credential).await?;

        // Already bookmarked: idempotent success, no duplicate row.
        if self.bookmarks.exists_for(member.id, cafe_id).await? {
            return Ok(cafe_id);
        }

        let bookmark = Bookmark::new(member.id, cafe.id);
        self.bookmarks.save(&bookmark).await?;

        Ok(bookmark.cafe_id)
    }

    async fn remove_bookmark(
        &self,
        credential: &Credential,
        cafe_id: CafeId,
    ) -> Result<CafeId, BookmarkError> {
        let cafe = self
            .cafes
            .find_by_id(cafe_id)
            .await?
            .ok_or(BookmarkError::CafeNotFound(cafe_id))?;

        // The requested id must agree with the entity the catalog resolved.
        if cafe.id != cafe_id {
            return Err(BookmarkError::InvalidCafeId(cafe_id));
        }

        let member = self.auth.resolve(credential).await?;

        // Zero rows affected means the pair was never bookmarked; that is
        // still a success.
        self.bookmarks.delete_for(member.id, cafe_id).await?;

        Ok(cafe_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::mocks::{
        MockAuthResolver, MockBookmarkRepository, MockCafeRepository,
    };
    use crate::domain::models::{Cafe, MemberId};
    use crate::domain::AuthError;

    fn make_cafe(id: i64) -> Cafe {
        Cafe {
            id: CafeId::new(id),
            name: "Fika".to_string(),
            theme: "Cozy".to_string(),
            rating: 4.5,
            photo_url: Some("https://media.example.com/cafes/fika.png".to_string()),
            review_count: 12,
        }
    }

    fn service(
        auth: MockAuthResolver,
        bookmarks: MockBookmarkRepository,
        cafes: MockCafeRepository,
    ) -> BookmarkServiceImpl<MockAuthResolver, MockBookmarkRepository, MockCafeRepository> {
        BookmarkServiceImpl::new(Arc::new(auth), Arc::new(bookmarks), Arc::new(cafes))
    }

    #[tokio::test]
    async fn list_is_empty_for_member_without_bookmarks() {
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            MockBookmarkRepository::new(),
            MockCafeRepository::new(),
        );

        let cafes = service
            .list_bookmarks(&Credential::new("token"))
            .await
            .unwrap();

        assert!(cafes.is_empty());
    }

    #[tokio::test]
    async fn add_twice_keeps_a_single_row() {
        let bookmarks = MockBookmarkRepository::new();
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            bookmarks.clone(),
            MockCafeRepository::new().with_cafe(make_cafe(7)),
        );
        let credential = Credential::new("token");

        let first = service.add_bookmark(&credential, CafeId::new(7)).await.unwrap();
        let second = service.add_bookmark(&credential, CafeId::new(7)).await.unwrap();

        assert_eq!(first, CafeId::new(7));
        assert_eq!(second, CafeId::new(7));
        assert_eq!(bookmarks.row_count(), 1);
        assert_eq!(bookmarks.save_calls(), 1);
    }

    #[tokio::test]
    async fn add_fails_for_unknown_cafe() {
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            MockBookmarkRepository::new(),
            MockCafeRepository::new(),
        );

        let err = service
            .add_bookmark(&Credential::new("token"), CafeId::new(404))
            .await
            .unwrap_err();

        assert!(matches!(err, BookmarkError::CafeNotFound(id) if id == CafeId::new(404)));
    }

    #[tokio::test]
    async fn add_fails_without_authentication() {
        let service = service(
            MockAuthResolver::unauthenticated(),
            MockBookmarkRepository::new(),
            MockCafeRepository::new().with_cafe(make_cafe(7)),
        );

        let err = service
            .add_bookmark(&Credential::new("expired"), CafeId::new(7))
            .await
            .unwrap_err();

        assert!(matches!(err, BookmarkError::Auth(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn remove_fails_for_unknown_cafe() {
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            MockBookmarkRepository::new(),
            MockCafeRepository::new(),
        );

        let err = service
            .remove_bookmark(&Credential::new("token"), CafeId::new(404))
            .await
            .unwrap_err();

        assert!(matches!(err, BookmarkError::CafeNotFound(id) if id == CafeId::new(404)));
    }

    #[tokio::test]
    async fn remove_fails_when_resolved_entity_disagrees() {
        // A catalog answering with a different entity than the one asked
        // for must trip the consistency check.
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            MockBookmarkRepository::new(),
            MockCafeRepository::new().with_entry(CafeId::new(7), make_cafe(9)),
        );

        let err = service
            .remove_bookmark(&Credential::new("token"), CafeId::new(7))
            .await
            .unwrap_err();

        assert!(matches!(err, BookmarkError::InvalidCafeId(id) if id == CafeId::new(7)));
    }

    #[tokio::test]
    async fn remove_of_missing_pair_is_silent_success() {
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            MockBookmarkRepository::new(),
            MockCafeRepository::new().with_cafe(make_cafe(7)),
        );

        let cafe_id = service
            .remove_bookmark(&Credential::new("token"), CafeId::new(7))
            .await
            .unwrap();

        assert_eq!(cafe_id, CafeId::new(7));
    }

    #[tokio::test]
    async fn remove_deletes_the_pair() {
        let bookmarks = MockBookmarkRepository::new();
        let service = service(
            MockAuthResolver::member(MemberId::new(1)),
            bookmarks.clone(),
            MockCafeRepository::new().with_cafe(make_cafe(7)),
        );
        let credential = Credential::new("token");

        service.add_bookmark(&credential, CafeId::new(7)).await.unwrap();
        assert_eq!(bookmarks.row_count(), 1);

        service.remove_bookmark(&credential, CafeId::new(7)).await.unwrap();
        assert_eq!(bookmarks.row_count(), 0);
    }
}
