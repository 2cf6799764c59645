use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::MemberId;

/// A registered member. The email is immutable after signup; nickname and
/// profile image are the mutable parts of the display profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub email: String,
    pub nickname: String,
    /// `None` means the member still shows the default placeholder image.
    pub photo_url: Option<String>,
}
