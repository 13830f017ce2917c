//! In-memory store used by the query-layer tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::query::store::{CommitOutcome, Entity, EntityStore, Mutation, StoreError};

/// A store backed by a plain vector. Identities are assigned from a counter
/// when an `Add` commits; commits apply their whole batch under one lock.
pub struct MemoryStore<T> {
    rows: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the store with rows that already carry identities.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let high_water = rows.iter().map(Entity::id).max().unwrap_or(0);
        Self {
            rows: RwLock::new(rows),
            next_id: AtomicI64::new(high_water + 1),
        }
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> EntityStore<T> for MemoryStore<T>
where
    T: Entity + Clone,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StoreError> {
        Ok(self.rows.read().iter().find(|row| row.id() == id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.rows.read().clone())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.rows.read().iter().any(|row| row.id() == id))
    }

    async fn commit(&self, mutations: Vec<Mutation<T>>) -> Result<CommitOutcome<T>, StoreError> {
        let mut rows = self.rows.write();
        let mut outcome = CommitOutcome::default();

        for mutation in mutations {
            match mutation {
                Mutation::Add(entity) => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                    let stored = entity.with_id(id);
                    rows.push(stored.clone());
                    outcome.created.push(stored);
                    outcome.rows_affected += 1;
                }
                Mutation::Update(entity) => {
                    if let Some(slot) = rows.iter_mut().find(|row| row.id() == entity.id()) {
                        *slot = entity;
                        outcome.rows_affected += 1;
                    }
                }
                Mutation::Remove(entity) => {
                    let before = rows.len();
                    rows.retain(|row| row.id() != entity.id());
                    outcome.rows_affected += (before - rows.len()) as u64;
                }
            }
        }

        Ok(outcome)
    }
}
