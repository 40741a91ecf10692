//! Collection storage behind the dashboard.
//!
//! Views only talk to [`Repository`]; [`providers::memory::InMemoryRepository`]
//! is the process-local implementation seeded with the mock data. A persistent
//! backend can implement the same trait without touching view code.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Identified;

pub mod providers;

pub use providers::memory::InMemoryRepository;

/// Repository failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A record with this id already exists.
    #[error("record with id '{0}' already exists")]
    DuplicateId(String),
    /// No record with this id.
    #[error("record with id '{0}' not found")]
    NotFound(String),
}

/// Result type alias for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait Repository<T>: Send + Sync + std::fmt::Debug
where
    T: Identified + Clone + Send + Sync + 'static,
{
    /// All records in insertion order.
    async fn list(&self) -> Vec<T>;

    /// Number of records.
    async fn count(&self) -> usize {
        self.list().await.len()
    }

    /// Insert a record. Fails if the id is taken.
    async fn add(&self, record: T) -> Result<()>;

    /// Replace the record with the same id.
    async fn update(&self, record: T) -> Result<()>;

    /// Remove and return the record with this id.
    async fn remove(&self, id: &str) -> Result<T>;
}
