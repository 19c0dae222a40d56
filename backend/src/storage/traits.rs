//! # Storage Traits
//!
//! The storage abstraction used by the domain layer, plus the errors every
//! backend reports.

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

use crate::domain::models::goal::DomainGoalCollection;

/// Failures of the persistence layer.
///
/// None of these are recoverable by the caller: the operation is aborted and
/// the previous record stays on disk untouched.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read goal record {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("goal record {} is corrupt: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode goal record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write goal record {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Trait defining the interface for goal collection storage
///
/// Implementations persist the collection as one unit. `load` on a store that
/// has never been written returns an empty collection; `save` replaces the
/// previous record completely.
#[async_trait]
pub trait GoalStorage: Send + Sync {
    /// Read the full collection
    async fn load(&self) -> Result<DomainGoalCollection, StorageError>;

    /// Overwrite the persisted record with `collection`
    async fn save(&self, collection: &DomainGoalCollection) -> Result<(), StorageError>;
}
