use async_trait::async_trait;

use crate::domain::{
    models::{Credential, Member},
    AuthError,
};

/// Derives the authenticated member from a request credential. Services
/// always go through this seam instead of trusting a client-supplied
/// member id.
#[async_trait]
pub trait AuthResolver: Send + Sync + 'static {
    async fn resolve(&self, credential: &Credential) -> Result<Member, AuthError>;
}
