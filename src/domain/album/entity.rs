// src/domain/album/entity.rs
use crate::domain::reaction::Reaction;

/// Per-album aggregate tracking total likes and dislikes across all users.
///
/// Counters are explicit and default to zero rather than relying on field
/// absence. They never go below zero within a single guarded decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCounter {
    pub id: Option<String>,
    pub album_id: String,
    pub likes: i64,
    pub deslikes: i64,
}

impl AlbumCounter {
    /// The record created lazily on the first reaction to an unseen album:
    /// the acted-upon counter starts at 1, the other at 0.
    pub fn initial(album_id: impl Into<String>, reaction: Reaction) -> Self {
        let (likes, deslikes) = match reaction {
            Reaction::Like => (1, 0),
            Reaction::Deslike => (0, 1),
        };
        Self {
            id: None,
            album_id: album_id.into(),
            likes,
            deslikes,
        }
    }

    pub fn count(&self, reaction: Reaction) -> i64 {
        match reaction {
            Reaction::Like => self.likes,
            Reaction::Deslike => self.deslikes,
        }
    }
}
