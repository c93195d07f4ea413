use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        album::{AlbumCounter, AlbumCounterRepository},
        reaction::Reaction,
        user::UserRepository,
    },
};
use std::sync::Arc;

/// The like/dislike ledger. Each operation is one linear sequence: a single
/// existence guard, a membership update on the user record, a counter update
/// on the album record, then a re-read of the user.
///
/// The counter updates follow a find-then-update pattern. The individual
/// `$addToSet` / `$inc` writes are atomic at the storage engine, but the
/// two-step sequences here are not: concurrent requests for the same album
/// can lose a lazy creation against an increment, and a decrement guard can
/// go stale between the read and the write.
pub struct ReactionCommandService {
    user_repo: Arc<dyn UserRepository>,
    album_repo: Arc<dyn AlbumCounterRepository>,
}

impl ReactionCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        album_repo: Arc<dyn AlbumCounterRepository>,
    ) -> Self {
        Self {
            user_repo,
            album_repo,
        }
    }

    /// Add `album_id` to the user's reaction list and bump the album
    /// counter, creating the counter record on first sight of the album.
    pub async fn add(
        &self,
        handle: &str,
        album_id: &str,
        reaction: Reaction,
    ) -> ApplicationResult<UserDto> {
        self.ensure_user_exists(handle).await?;

        self.user_repo
            .add_reaction(handle, reaction, album_id)
            .await?;

        match self.album_repo.find_by_album_id(album_id).await? {
            Some(_) => self.album_repo.increment(album_id, reaction, 1).await?,
            None => {
                tracing::debug!(album_id, %reaction, "seeding album counter");
                self.album_repo
                    .insert(AlbumCounter::initial(album_id, reaction))
                    .await?;
            }
        }

        self.refreshed_user(handle).await
    }

    /// Remove `album_id` from the user's reaction list and decrement the
    /// album counter if one exists and is above zero. A removal never
    /// creates a counter record.
    pub async fn remove(
        &self,
        handle: &str,
        album_id: &str,
        reaction: Reaction,
    ) -> ApplicationResult<UserDto> {
        self.ensure_user_exists(handle).await?;

        self.user_repo
            .remove_reaction(handle, reaction, album_id)
            .await?;

        if let Some(counter) = self.album_repo.find_by_album_id(album_id).await? {
            if counter.count(reaction) > 0 {
                self.album_repo.increment(album_id, reaction, -1).await?;
            }
        }

        self.refreshed_user(handle).await
    }

    async fn ensure_user_exists(&self, handle: &str) -> ApplicationResult<()> {
        if self.user_repo.find_by_handle(handle).await?.is_none() {
            return Err(ApplicationError::not_found("User not found"));
        }
        Ok(())
    }

    async fn refreshed_user(&self, handle: &str) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_handle(handle)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found("User not found"))
    }
}
