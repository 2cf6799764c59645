mod bookmark;
mod cafe;
mod credential;
mod ids;
mod member;
mod menu;
mod profile;

pub use bookmark::{Bookmark, BookmarkedCafe};
pub use cafe::Cafe;
pub use credential::Credential;
pub use ids::{CafeId, MemberId, MenuId};
pub use member::Member;
pub use menu::{Menu, MenuCategory};
pub use profile::{Profile, ProfileImageUpload, ProfileUpdate};
