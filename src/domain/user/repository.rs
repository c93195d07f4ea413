// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::reaction::Reaction;
use crate::domain::user::entity::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert unconditionally. No uniqueness check on the handle; duplicate
    /// handles are accepted and later lookups return an arbitrary match.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_handle(&self, handle: &str) -> DomainResult<Option<User>>;

    /// Set-membership add of `album_id` into the reaction list. No-op when
    /// the id is already present or when no user matches the handle.
    async fn add_reaction(
        &self,
        handle: &str,
        reaction: Reaction,
        album_id: &str,
    ) -> DomainResult<()>;

    /// Remove `album_id` from the reaction list. No-op when absent.
    async fn remove_reaction(
        &self,
        handle: &str,
        reaction: Reaction,
        album_id: &str,
    ) -> DomainResult<()>;
}
