mod bookmark_repo;
mod cafe_repo;
mod member_repo;
mod menu_repo;
mod repo_error;

pub use bookmark_repo::*;
pub use cafe_repo::*;
pub use member_repo::*;
pub use menu_repo::*;
pub use repo_error::RepositoryError;
