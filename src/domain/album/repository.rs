// src/domain/album/repository.rs
use crate::domain::album::entity::AlbumCounter;
use crate::domain::errors::DomainResult;
use crate::domain::reaction::Reaction;
use async_trait::async_trait;

#[async_trait]
pub trait AlbumCounterRepository: Send + Sync {
    async fn find_by_album_id(&self, album_id: &str) -> DomainResult<Option<AlbumCounter>>;

    /// Insert a freshly seeded counter record (see [`AlbumCounter::initial`]).
    async fn insert(&self, counter: AlbumCounter) -> DomainResult<()>;

    /// Apply `delta` to one counter field. No-op when no record matches.
    /// The field update itself is atomic at the storage engine; callers own
    /// any check-before-decrement guard.
    async fn increment(
        &self,
        album_id: &str,
        reaction: Reaction,
        delta: i64,
    ) -> DomainResult<()>;
}
