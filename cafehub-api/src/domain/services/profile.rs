use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{
        models::{Credential, Profile, ProfileImageUpload, ProfileUpdate},
        ports::{
            inbound::ProfileService,
            outbound::{AuthResolver, ImageStore},
        },
        ProfileError,
    },
    repositories::MemberRepository,
};

/// Implementation of the ProfileService inbound port.
///
/// Nickname and image changes are independent sub-operations: an image
/// upload failure aborts the request, but a nickname already written stays
/// written. The previous image object is removed only after the new URL
/// has been associated, and removal is best-effort.
pub struct ProfileServiceImpl<A, M, S> {
    auth: Arc<A>,
    members: Arc<M>,
    images: Arc<S>,
    default_image_url: String,
}

impl<A, M, S> ProfileServiceImpl<A, M, S> {
    pub fn new(
        auth: Arc<A>,
        members: Arc<M>,
        images: Arc<S>,
        default_image_url: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            members,
            images,
            default_image_url: default_image_url.into(),
        }
    }
}

impl<A, M, S: ImageStore> ProfileServiceImpl<A, M, S> {
    async fn delete_prior_image(&self, url: &str) {
        let Some(key) = self.images.key_of(url) else {
            tracing::warn!("could not derive object key from prior image url: {url}");
            return;
        };

        if let Err(err) = self.images.delete(&key).await {
            tracing::error!("failed to delete previous profile image {key}: {err}");
        }
    }
}

#[async_trait]
impl<A: AuthResolver, M: MemberRepository, S: ImageStore> ProfileService
    for ProfileServiceImpl<A, M, S>
{
    async fn get_profile(&self, credential: &Credential) -> Result<Profile, ProfileError> {
        let member = self.auth.resolve(credential).await?;

        Ok(Profile {
            nickname: member.nickname,
            email: member.email,
            profile_img: member
                .photo_url
                .unwrap_or_else(|| self.default_image_url.clone()),
        })
    }

    async fn update_profile(
        &self,
        credential: &Credential,
        update: ProfileUpdate,
    ) -> Result<(), ProfileError> {
        let member = self.auth.resolve(credential).await?;

        if let Some(nickname) = update.nickname.as_deref() {
            self.members.update_nickname(member.id, nickname).await?;
        }

        if let Some(image) = update.image {
            let prior = member.photo_url;

            let key = object_key(&image);
            let url = self
                .images
                .put(&key, image.bytes, image.content_type.as_deref())
                .await
                .map_err(|err| ProfileError::UpdateFailed(err.to_string()))?;

            self.members.update_photo_url(member.id, &url).await?;

            // Best effort: the new image is already live, so a failed
            // cleanup must not fail the request.
            if let Some(prior) = prior {
                if prior != self.default_image_url {
                    self.delete_prior_image(&prior).await;
                }
            }
        }

        Ok(())
    }
}

/// Collision-resistant object key: random prefix plus the original
/// filename.
fn object_key(image: &ProfileImageUpload) -> String {
    format!("{}-{}", Uuid::new_v4(), image.filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Member, MemberId};
    use crate::domain::services::mocks::{
        MockAuthResolver, MockImageStore, MockMemberRepository,
    };

    const DEFAULT_IMAGE: &str = "https://media.example.com/cafehub-media/default-profile.png";

    fn make_member(photo_url: Option<&str>) -> Member {
        Member {
            id: MemberId::new(1),
            email: "joe@cafehub.com".to_string(),
            nickname: "joe".to_string(),
            photo_url: photo_url.map(str::to_string),
        }
    }

    fn make_upload(filename: &str) -> ProfileImageUpload {
        ProfileImageUpload {
            filename: filename.to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![0xde, 0xad, 0xbe, 0xef],
        }
    }

    fn service(
        member: Member,
        members: MockMemberRepository,
        images: MockImageStore,
    ) -> ProfileServiceImpl<MockAuthResolver, MockMemberRepository, MockImageStore> {
        ProfileServiceImpl::new(
            Arc::new(MockAuthResolver::with_member(member)),
            Arc::new(members),
            Arc::new(images),
            DEFAULT_IMAGE,
        )
    }

    #[tokio::test]
    async fn get_profile_substitutes_default_image() {
        let member = make_member(None);
        let service = service(
            member.clone(),
            MockMemberRepository::new().with_member(member),
            MockImageStore::new(),
        );

        let profile = service.get_profile(&Credential::new("token")).await.unwrap();

        assert_eq!(profile.nickname, "joe");
        assert_eq!(profile.email, "joe@cafehub.com");
        assert_eq!(profile.profile_img, DEFAULT_IMAGE);
    }

    #[tokio::test]
    async fn nickname_change_leaves_image_untouched() {
        let member = make_member(None);
        let members = MockMemberRepository::new().with_member(member.clone());
        let images = MockImageStore::new();
        let service = service(member, members.clone(), images.clone());

        service
            .update_profile(
                &Credential::new("token"),
                ProfileUpdate {
                    nickname: Some("barista_joe".to_string()),
                    image: None,
                },
            )
            .await
            .unwrap();

        let stored = members.get(MemberId::new(1)).unwrap();
        assert_eq!(stored.nickname, "barista_joe");
        assert_eq!(stored.email, "joe@cafehub.com");
        assert_eq!(stored.photo_url, None);
        assert!(images.puts().is_empty());
        assert!(images.deletes().is_empty());
    }

    #[tokio::test]
    async fn first_upload_attempts_no_deletion() {
        let member = make_member(None);
        let members = MockMemberRepository::new().with_member(member.clone());
        let images = MockImageStore::new();
        let service = service(member, members.clone(), images.clone());

        service
            .update_profile(
                &Credential::new("token"),
                ProfileUpdate {
                    nickname: None,
                    image: Some(make_upload("latte.png")),
                },
            )
            .await
            .unwrap();

        let puts = images.puts();
        assert_eq!(puts.len(), 1);
        assert!(puts[0].ends_with("-latte.png"));
        assert!(images.deletes().is_empty());

        let stored = members.get(MemberId::new(1)).unwrap();
        assert_eq!(stored.photo_url, Some(images.url_of(&puts[0])));
    }

    #[tokio::test]
    async fn default_image_is_never_deleted() {
        let member = make_member(Some(DEFAULT_IMAGE));
        let members = MockMemberRepository::new().with_member(member.clone());
        let images = MockImageStore::new();
        let service = service(member, members, images.clone());

        service
            .update_profile(
                &Credential::new("token"),
                ProfileUpdate {
                    nickname: None,
                    image: Some(make_upload("latte.png")),
                },
            )
            .await
            .unwrap();

        assert!(images.deletes().is_empty());
    }

    #[tokio::test]
    async fn replacement_deletes_exactly_the_prior_key() {
        let images = MockImageStore::new();
        let prior_url = images.url_of("old-key.png");
        let member = make_member(Some(&prior_url));
        let members = MockMemberRepository::new().with_member(member.clone());
        let service = service(member, members.clone(), images.clone());

        service
            .update_profile(
                &Credential::new("token"),
                ProfileUpdate {
                    nickname: None,
                    image: Some(make_upload("latte.png")),
                },
            )
            .await
            .unwrap();

        assert_eq!(images.deletes(), vec!["old-key.png".to_string()]);

        // The new association landed before the deletion attempt.
        let stored = members.get(MemberId::new(1)).unwrap();
        let new_url = stored.photo_url.unwrap();
        assert_ne!(new_url, prior_url);
    }

    #[tokio::test]
    async fn failed_deletion_still_reports_success() {
        let images = MockImageStore::new().failing_deletes();
        let prior_url = images.url_of("old-key.png");
        let member = make_member(Some(&prior_url));
        let members = MockMemberRepository::new().with_member(member.clone());
        let service = service(member, members.clone(), images.clone());

        let result = service
            .update_profile(
                &Credential::new("token"),
                ProfileUpdate {
                    nickname: None,
                    image: Some(make_upload("latte.png")),
                },
            )
            .await;

        assert!(result.is_ok());
        let stored = members.get(MemberId::new(1)).unwrap();
        assert_ne!(stored.photo_url, Some(prior_url));
    }

    #[tokio::test]
    async fn failed_upload_aborts_without_association() {
        let member = make_member(None);
        let members = MockMemberRepository::new().with_member(member.clone());
        let images = MockImageStore::new().failing_puts();
        let service = service(member, members.clone(), images.clone());

        let err = service
            .update_profile(
                &Credential::new("token"),
                ProfileUpdate {
                    nickname: Some("barista_joe".to_string()),
                    image: Some(make_upload("latte.png")),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProfileError::UpdateFailed(_)));

        // The nickname sub-operation had already been applied and is not
        // rolled back; the image reference stays unchanged.
        let stored = members.get(MemberId::new(1)).unwrap();
        assert_eq!(stored.nickname, "barista_joe");
        assert_eq!(stored.photo_url, None);
    }

    #[tokio::test]
    async fn nickname_scenario_round_trips_through_get_profile() {
        let member = make_member(None);
        let members = MockMemberRepository::new().with_member(member.clone());
        let images = MockImageStore::new();
        let auth = Arc::new(MockAuthResolver::backed_by(members.clone()));
        let service = ProfileServiceImpl::new(
            auth,
            Arc::new(members),
            Arc::new(images),
            DEFAULT_IMAGE,
        );
        let credential = Credential::new("token");

        service
            .update_profile(
                &credential,
                ProfileUpdate {
                    nickname: Some("barista_joe".to_string()),
                    image: None,
                },
            )
            .await
            .unwrap();

        let profile = service.get_profile(&credential).await.unwrap();
        assert_eq!(profile.nickname, "barista_joe");
        assert_eq!(profile.email, "joe@cafehub.com");
        assert_eq!(profile.profile_img, DEFAULT_IMAGE);
    }
}
