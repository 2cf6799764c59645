//! In-memory mock implementations of the outbound ports for service tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{
    models::{Bookmark, BookmarkedCafe, Cafe, CafeId, Credential, Member, MemberId},
    ports::outbound::{AuthResolver, ImageStore},
    AuthError, ImageStoreError,
};
use crate::repositories::{
    BookmarkRepository, CafeRepository, MemberRepository, RepositoryError,
};

/// Resolver that either returns a fixed member, re-reads it from a member
/// repository, or rejects every credential.
pub struct MockAuthResolver {
    mode: ResolverMode,
}

enum ResolverMode {
    Fixed(Member),
    Backed(MockMemberRepository),
    Rejecting,
}

impl MockAuthResolver {
    pub fn member(id: MemberId) -> Self {
        Self::with_member(Member {
            id,
            email: "member@cafehub.com".to_string(),
            nickname: "member".to_string(),
            photo_url: None,
        })
    }

    pub fn with_member(member: Member) -> Self {
        Self {
            mode: ResolverMode::Fixed(member),
        }
    }

    /// Resolve against the live repository state, so profile reads after
    /// writes observe the update.
    pub fn backed_by(members: MockMemberRepository) -> Self {
        Self {
            mode: ResolverMode::Backed(members),
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            mode: ResolverMode::Rejecting,
        }
    }
}

#[async_trait]
impl AuthResolver for MockAuthResolver {
    async fn resolve(&self, _credential: &Credential) -> Result<Member, AuthError> {
        match &self.mode {
            ResolverMode::Fixed(member) => Ok(member.clone()),
            ResolverMode::Backed(members) => {
                members.first().ok_or(AuthError::Unauthenticated)
            }
            ResolverMode::Rejecting => Err(AuthError::Unauthenticated),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockBookmarkRepository {
    rows: Arc<RwLock<Vec<Bookmark>>>,
    save_calls: Arc<RwLock<usize>>,
}

impl MockBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    pub fn save_calls(&self) -> usize {
        *self.save_calls.read().unwrap()
    }
}

#[async_trait]
impl BookmarkRepository for MockBookmarkRepository {
    async fn find_all_by_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<BookmarkedCafe>, RepositoryError> {
        let cafes = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|row| row.member_id == member_id)
            .map(|row| BookmarkedCafe {
                cafe_id: row.cafe_id,
                cafe_name: format!("cafe-{}", row.cafe_id),
                cafe_theme: "Cozy".to_string(),
                cafe_rating: 4.0,
                cafe_photo_url: None,
                cafe_review_num: 0,
            })
            .collect();

        Ok(cafes)
    }

    async fn exists_for(
        &self,
        member_id: MemberId,
        cafe_id: CafeId,
    ) -> Result<bool, RepositoryError> {
        let exists = self
            .rows
            .read()
            .unwrap()
            .iter()
            .any(|row| row.member_id == member_id && row.cafe_id == cafe_id);

        Ok(exists)
    }

    async fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        *self.save_calls.write().unwrap() += 1;

        let mut rows = self.rows.write().unwrap();
        // Mirrors the unique constraint on (member_id, cafe_id).
        if !rows.contains(bookmark) {
            rows.push(*bookmark);
        }

        Ok(())
    }

    async fn delete_for(
        &self,
        member_id: MemberId,
        cafe_id: CafeId,
    ) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.write().unwrap();
        let before = rows.len();
        rows.retain(|row| !(row.member_id == member_id && row.cafe_id == cafe_id));

        Ok((before - rows.len()) as u64)
    }
}

#[derive(Clone, Default)]
pub struct MockCafeRepository {
    cafes: HashMap<CafeId, Cafe>,
}

impl MockCafeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cafe(self, cafe: Cafe) -> Self {
        let id = cafe.id;
        self.with_entry(id, cafe)
    }

    /// Register a cafe under an arbitrary lookup id, allowing tests to
    /// simulate a catalog answering with a different entity.
    pub fn with_entry(mut self, id: CafeId, cafe: Cafe) -> Self {
        self.cafes.insert(id, cafe);
        self
    }
}

#[async_trait]
impl CafeRepository for MockCafeRepository {
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError> {
        Ok(self.cafes.get(&id).cloned())
    }
}

#[derive(Clone, Default)]
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
}

impl MockMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(self, member: Member) -> Self {
        self.members.write().unwrap().insert(member.id, member);
        self
    }

    pub fn get(&self, id: MemberId) -> Option<Member> {
        self.members.read().unwrap().get(&id).cloned()
    }

    pub fn first(&self) -> Option<Member> {
        let members = self.members.read().unwrap();
        let mut ids: Vec<_> = members.keys().copied().collect();
        ids.sort_by_key(|id| id.as_i64());
        ids.first().map(|id| members[id].clone())
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, RepositoryError> {
        let member = self
            .members
            .read()
            .unwrap()
            .values()
            .find(|member| member.email == email)
            .cloned();

        Ok(member)
    }

    async fn update_nickname(
        &self,
        id: MemberId,
        nickname: &str,
    ) -> Result<(), RepositoryError> {
        let mut members = self.members.write().unwrap();
        let member = members
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("member {id}")))?;
        member.nickname = nickname.to_string();

        Ok(())
    }

    async fn update_photo_url(
        &self,
        id: MemberId,
        photo_url: &str,
    ) -> Result<(), RepositoryError> {
        let mut members = self.members.write().unwrap();
        let member = members
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("member {id}")))?;
        member.photo_url = Some(photo_url.to_string());

        Ok(())
    }
}

const MOCK_STORE_BASE: &str = "https://media.example.com/cafehub-media/";

/// Object store recording puts and deletes, with switchable failure modes.
#[derive(Clone, Default)]
pub struct MockImageStore {
    puts: Arc<RwLock<Vec<String>>>,
    deletes: Arc<RwLock<Vec<String>>>,
    fail_puts: bool,
    fail_deletes: bool,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts(mut self) -> Self {
        self.fail_puts = true;
        self
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn url_of(&self, key: &str) -> String {
        format!("{MOCK_STORE_BASE}{key}")
    }

    pub fn puts(&self) -> Vec<String> {
        self.puts.read().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.read().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for MockImageStore {
    async fn put(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<String, ImageStoreError> {
        if self.fail_puts {
            return Err(ImageStoreError::Storage("upload refused".to_string()));
        }

        self.puts.write().unwrap().push(key.to_string());

        Ok(self.url_of(key))
    }

    async fn delete(&self, key: &str) -> Result<(), ImageStoreError> {
        self.deletes.write().unwrap().push(key.to_string());

        if self.fail_deletes {
            return Err(ImageStoreError::Storage("delete refused".to_string()));
        }

        Ok(())
    }

    fn key_of(&self, url: &str) -> Option<String> {
        url.strip_prefix(MOCK_STORE_BASE)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}
