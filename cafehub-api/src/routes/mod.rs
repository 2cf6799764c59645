pub(crate) mod bookmarks;
pub(crate) mod cafes;
pub(crate) mod error;
pub(crate) mod profile;
pub(crate) mod responses;

pub(crate) use error::{ApiError, ErrorCode};
pub(crate) use responses::ApiSuccess;
