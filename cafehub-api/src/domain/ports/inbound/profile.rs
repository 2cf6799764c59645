use async_trait::async_trait;

use crate::domain::{
    models::{Credential, Profile, ProfileUpdate},
    ProfileError,
};

#[async_trait]
pub trait ProfileService: Send + Sync + 'static {
    /// The acting member's display profile. Pure projection, no side
    /// effects.
    async fn get_profile(&self, credential: &Credential) -> Result<Profile, ProfileError>;

    /// Apply a nickname and/or profile image change for the acting member.
    async fn update_profile(
        &self,
        credential: &Credential,
        update: ProfileUpdate,
    ) -> Result<(), ProfileError>;
}
