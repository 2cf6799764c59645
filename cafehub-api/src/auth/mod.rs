mod extractor;
mod jwt;

pub use jwt::JwtAuthResolver;
