use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::{
    domain::{
        models::{Credential, Member},
        ports::outbound::AuthResolver,
        AuthError,
    },
    repositories::MemberRepository,
};

#[derive(Debug, Deserialize)]
struct Claims {
    /// Member email, set by the identity provider at token issuance.
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// AuthResolver backed by HS256 bearer tokens. Validates the signature and
/// expiry, then loads the member the token subject refers to.
pub struct JwtAuthResolver<M> {
    decoding_key: DecodingKey,
    validation: Validation,
    members: Arc<M>,
}

impl<M> JwtAuthResolver<M> {
    pub fn new(secret: &[u8], members: Arc<M>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            members,
        }
    }
}

#[async_trait]
impl<M: MemberRepository> AuthResolver for JwtAuthResolver<M> {
    async fn resolve(&self, credential: &Credential) -> Result<Member, AuthError> {
        let token_data = decode::<Claims>(credential.token(), &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!("rejected bearer credential: {err}");
                AuthError::Unauthenticated
            })?;

        self.members
            .find_by_email(&token_data.claims.sub)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }
}
