// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{ReactionCommandService, UserCommandService},
        queries::{AlbumQueryService, UserQueryService},
    },
    domain::{album::AlbumCounterRepository, user::UserRepository},
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub reaction_commands: Arc<ReactionCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub album_queries: Arc<AlbumQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        album_repo: Arc<dyn AlbumCounterRepository>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo)));
        let reaction_commands = Arc::new(ReactionCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&album_repo),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let album_queries = Arc::new(AlbumQueryService::new(Arc::clone(&album_repo)));

        Self {
            user_commands,
            reaction_commands,
            user_queries,
            album_queries,
        }
    }
}
