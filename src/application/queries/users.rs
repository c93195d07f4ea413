use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserRepository,
};
use std::sync::Arc;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get(&self, handle: &str) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_handle(handle)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found("User not found"))
    }
}
