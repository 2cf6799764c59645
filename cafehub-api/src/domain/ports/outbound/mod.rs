mod auth;
mod media;

pub use auth::AuthResolver;
pub use media::ImageStore;
