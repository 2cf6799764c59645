mod client;
mod store_url;

pub use client::{MediaStoreClient, MediaStoreError, ObjectMetadata};
pub use store_url::StoreUrl;
