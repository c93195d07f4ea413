use crate::{
    application::{
        dto::AlbumCounterDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::album::AlbumCounterRepository,
};
use std::sync::Arc;

pub struct AlbumQueryService {
    album_repo: Arc<dyn AlbumCounterRepository>,
}

impl AlbumQueryService {
    pub fn new(album_repo: Arc<dyn AlbumCounterRepository>) -> Self {
        Self { album_repo }
    }

    pub async fn get(&self, album_id: &str) -> ApplicationResult<AlbumCounterDto> {
        self.album_repo
            .find_by_album_id(album_id)
            .await?
            .map(AlbumCounterDto::from)
            .ok_or_else(|| ApplicationError::not_found("Album not found"))
    }
}
