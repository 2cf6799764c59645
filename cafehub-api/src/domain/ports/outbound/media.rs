use async_trait::async_trait;

use crate::domain::ImageStoreError;

/// Object storage seam for profile images. Keys are opaque to the domain;
/// the adapter decides bucket and URL layout.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Upload an object and return the public URL it is served from.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, ImageStoreError>;

    /// Delete an object by key.
    async fn delete(&self, key: &str) -> Result<(), ImageStoreError>;

    /// Recover the object key from a URL previously returned by [`put`],
    /// if the URL points into this store.
    ///
    /// [`put`]: ImageStore::put
    fn key_of(&self, url: &str) -> Option<String>;
}
