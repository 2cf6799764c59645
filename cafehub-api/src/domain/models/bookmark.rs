use serde::Serialize;
use sqlx::FromRow;

use super::{CafeId, MemberId};

/// The saved association between a member and a cafe. Uniquely identified
/// by the `(member_id, cafe_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bookmark {
    pub member_id: MemberId,
    pub cafe_id: CafeId,
}

impl Bookmark {
    pub fn new(member_id: MemberId, cafe_id: CafeId) -> Self {
        Self { member_id, cafe_id }
    }
}

/// Summary projection of a bookmarked cafe, shaped for the bookmark list
/// response.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkedCafe {
    pub cafe_id: CafeId,
    pub cafe_name: String,
    pub cafe_theme: String,
    pub cafe_rating: f64,
    pub cafe_photo_url: Option<String>,
    pub cafe_review_num: i32,
}
