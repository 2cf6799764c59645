#[derive(Debug, Clone)]
pub struct StoreUrl(String);

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl StoreUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Append the given path segment to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// The URL of an object addressed by bucket and key.
    pub fn object_url(&self, bucket: &str, key: &str) -> Self {
        self.append_path(bucket).append_path(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_path_joins_with_single_slash() {
        let url = StoreUrl::new("https://media.example.com/");
        assert_eq!(
            url.append_path("/cafehub-media").as_ref(),
            "https://media.example.com/cafehub-media"
        );
    }

    #[test]
    fn object_url_nests_bucket_and_key() {
        let url = StoreUrl::new("https://media.example.com");
        assert_eq!(
            url.object_url("cafehub-media", "abc-latte.png").as_ref(),
            "https://media.example.com/cafehub-media/abc-latte.png"
        );
    }
}
