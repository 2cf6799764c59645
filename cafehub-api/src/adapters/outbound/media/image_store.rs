use async_trait::async_trait;
use media_store::{MediaStoreClient, ObjectMetadata};

use crate::domain::{ports::outbound::ImageStore, ImageStoreError};

/// ImageStore adapter over the media-store gateway client, bound to a
/// single bucket.
pub struct MediaStoreImageStore {
    client: MediaStoreClient,
    bucket: String,
}

impl MediaStoreImageStore {
    pub fn new(client: MediaStoreClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ImageStore for MediaStoreImageStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, ImageStoreError> {
        let metadata = ObjectMetadata::new(bytes.len() as u64, content_type);

        self.client
            .put_object(&self.bucket, key, bytes, metadata)
            .await
            .map_err(|err| ImageStoreError::Storage(err.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), ImageStoreError> {
        self.client
            .delete_object(&self.bucket, key)
            .await
            .map_err(|err| ImageStoreError::Storage(err.to_string()))
    }

    fn key_of(&self, url: &str) -> Option<String> {
        let bucket_root = self.client.url_of(&self.bucket, "");

        url.strip_prefix(&bucket_root)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MediaStoreImageStore {
        MediaStoreImageStore::new(
            MediaStoreClient::new("https://media.example.com", "key"),
            "cafehub-media",
        )
    }

    #[test]
    fn key_of_strips_the_bucket_root() {
        let store = store();

        assert_eq!(
            store.key_of("https://media.example.com/cafehub-media/uuid-latte.png"),
            Some("uuid-latte.png".to_string())
        );
    }

    #[test]
    fn key_of_rejects_foreign_urls() {
        let store = store();

        assert_eq!(store.key_of("https://elsewhere.example.com/pic.png"), None);
        assert_eq!(store.key_of("https://media.example.com/cafehub-media/"), None);
    }
}
