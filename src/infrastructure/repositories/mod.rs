// src/infrastructure/repositories/mod.rs
mod mongo_album;
mod mongo_user;

pub use mongo_album::MongoAlbumCounterRepository;
pub use mongo_user::MongoUserRepository;

use crate::domain::errors::DomainError;

pub(crate) fn map_mongo(err: mongodb::error::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}
