use std::sync::Arc;

use media_store::MediaStoreClient;
use sqlx::PgPool;

use crate::{
    adapters::outbound::media::MediaStoreImageStore,
    auth::JwtAuthResolver,
    config::Settings,
    domain::{
        ports::inbound::{BookmarkService, ProfileService},
        services::{BookmarkServiceImpl, ProfileServiceImpl},
    },
    repositories::{
        BookmarkRepositoryImpl, CafeRepository, CafeRepositoryImpl, MemberRepositoryImpl,
        MenuRepository, MenuRepositoryImpl,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub bookmark_service: Arc<dyn BookmarkService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub cafe_repo: Arc<dyn CafeRepository>,
    pub menu_repo: Arc<dyn MenuRepository>,
}

impl AppState {
    pub fn new(db_pool: PgPool, config: &Settings) -> Self {
        let members = Arc::new(MemberRepositoryImpl::new(db_pool.clone()));
        let cafes = Arc::new(CafeRepositoryImpl::new(db_pool.clone()));
        let bookmarks = Arc::new(BookmarkRepositoryImpl::new(db_pool.clone()));
        let menus = Arc::new(MenuRepositoryImpl::new(db_pool));

        let auth = Arc::new(JwtAuthResolver::new(
            config.auth.jwt_secret.as_bytes(),
            members.clone(),
        ));

        let store_client =
            MediaStoreClient::new(config.media.base_url.clone(), config.media.api_key.clone());
        let images = Arc::new(MediaStoreImageStore::new(
            store_client,
            config.media.bucket.clone(),
        ));

        let bookmark_service: Arc<dyn BookmarkService> = Arc::new(BookmarkServiceImpl::new(
            auth.clone(),
            bookmarks,
            cafes.clone(),
        ));
        let profile_service: Arc<dyn ProfileService> = Arc::new(ProfileServiceImpl::new(
            auth,
            members,
            images,
            config.media.default_image_url.clone(),
        ));

        Self {
            bookmark_service,
            profile_service,
            cafe_repo: cafes,
            menu_repo: menus,
        }
    }
}
