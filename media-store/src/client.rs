use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use thiserror::Error;

use crate::StoreUrl;

/// Client for an S3-compatible object storage gateway.
///
/// Objects are addressed path-style as `{base_url}/{bucket}/{key}` and the
/// gateway authenticates requests with a bearer api key.
pub struct MediaStoreClient {
    http: reqwest::Client,
    base_url: StoreUrl,
    api_key: String,
}

/// Metadata recorded alongside an uploaded object.
#[derive(Debug, Clone)]
pub struct ObjectMetadata {
    pub content_length: u64,
    pub content_type: Option<String>,
}

impl ObjectMetadata {
    pub fn new(content_length: u64, content_type: Option<impl Into<String>>) -> Self {
        Self {
            content_length,
            content_type: content_type.map(Into::into),
        }
    }
}

impl MediaStoreClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: StoreUrl::new(base_url),
            api_key: api_key.into(),
        }
    }

    /// The public URL the object is served from.
    pub fn url_of(&self, bucket: &str, key: &str) -> String {
        self.base_url.object_url(bucket, key).as_ref().to_string()
    }

    /// Upload an object and return its public URL.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        metadata: ObjectMetadata,
    ) -> Result<String, MediaStoreError> {
        let url = self.base_url.object_url(bucket, key);

        let mut request = self
            .http
            .put(url.as_ref())
            .bearer_auth(&self.api_key)
            .header(CONTENT_LENGTH, metadata.content_length)
            .body(bytes);
        if let Some(content_type) = &metadata.content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| MediaStoreError::ConnectionError(e.to_string()))?;

        Self::check_status(resp)?;

        Ok(self.url_of(bucket, key))
    }

    /// Delete an object. Deleting a key that does not exist is not an error
    /// on S3-compatible stores.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), MediaStoreError> {
        let url = self.base_url.object_url(bucket, key);

        let resp = self
            .http
            .delete(url.as_ref())
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| MediaStoreError::ConnectionError(e.to_string()))?;

        Self::check_status(resp)?;

        Ok(())
    }

    fn check_status(resp: reqwest::Response) -> Result<(), MediaStoreError> {
        let status = resp.status();
        if status == 401 || status == 403 {
            return Err(MediaStoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(MediaStoreError::ResponseError(format!(
                "store responded with status {}",
                status.as_u16()
            )));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum MediaStoreError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ConnectionError: {0}")]
    ConnectionError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_of_is_path_style() {
        let client = MediaStoreClient::new("https://media.example.com/", "key");
        assert_eq!(
            client.url_of("cafehub-media", "uuid-cat.png"),
            "https://media.example.com/cafehub-media/uuid-cat.png"
        );
    }
}
