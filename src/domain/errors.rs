// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Absence of a record is modeled as `Ok(None)` at the repository seams, so
/// the only fault a repository raises is a storage-layer one.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("persistence error: {0}")]
    Persistence(String),
}
