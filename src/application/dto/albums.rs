use crate::domain::album::AlbumCounter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumCounterDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub album_id: String,
    pub likes: i64,
    pub deslikes: i64,
}

impl From<AlbumCounter> for AlbumCounterDto {
    fn from(counter: AlbumCounter) -> Self {
        Self {
            id: counter.id,
            album_id: counter.album_id,
            likes: counter.likes,
            deslikes: counter.deslikes,
        }
    }
}
