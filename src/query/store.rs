//! The boundary between the query layer and a backing store.
//!
//! A store owns the entities; the query layer never caches or retains them
//! beyond a single call. Store failures propagate unchanged to the caller,
//! with no retry and no translation.

use async_trait::async_trait;
use thiserror::Error;

/// Capability required of every stored record: an integer identity assigned
/// by the store on creation, unchanged for the life of the record.
pub trait Entity: Send + Sync {
    fn id(&self) -> i64;

    /// The same entity carrying its store-assigned identity.
    fn with_id(self, id: i64) -> Self;
}

/// A staged write, applied only when the batch is committed.
#[derive(Debug, Clone)]
pub enum Mutation<T> {
    Add(T),
    Update(T),
    Remove(T),
}

/// Result of committing a batch of mutations.
#[derive(Debug)]
pub struct CommitOutcome<T> {
    /// Rows touched across the whole batch. Zero is a normal outcome.
    pub rows_affected: u64,
    /// Stored rows produced by `Add` mutations, identities assigned.
    pub created: Vec<T>,
}

impl<T> Default for CommitOutcome<T> {
    fn default() -> Self {
        Self {
            rows_affected: 0,
            created: Vec::new(),
        }
    }
}

/// Errors surfaced by a backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One queryable collection of entities.
///
/// `fetch_all` is the scan the evaluator consumes; `commit` applies a batch
/// of staged mutations as a single all-or-nothing unit and reports how many
/// rows it touched.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StoreError>;

    async fn fetch_all(&self) -> Result<Vec<T>, StoreError>;

    async fn exists(&self, id: i64) -> Result<bool, StoreError>;

    async fn commit(&self, mutations: Vec<Mutation<T>>) -> Result<CommitOutcome<T>, StoreError>;
}
