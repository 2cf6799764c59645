use serde::Serialize;

/// A member's display profile.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub nickname: String,
    pub email: String,
    pub profile_img: String,
}

/// A profile change request. Both parts are optional and independent:
/// a request may rename, replace the image, or do both.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub nickname: Option<String>,
    pub image: Option<ProfileImageUpload>,
}

/// An uploaded profile image payload.
#[derive(Debug, Clone)]
pub struct ProfileImageUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
