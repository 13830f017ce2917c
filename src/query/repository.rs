//! Per-entity-type facade over a store.
//!
//! Reads delegate to the evaluator against the store's scan; writes are
//! staged and committed atomically as one unit per `save_changes` call. The
//! repository holds no state beyond the staged batch and never retains
//! entities across calls, so concurrent callers only contend on the store's
//! own transaction isolation. Concurrent updates of the same entity race and
//! the last commit wins.

use parking_lot::Mutex;

use crate::query::evaluator;
use crate::query::specification::{ProjectionSpecification, Specification};
use crate::query::store::{CommitOutcome, Entity, EntityStore, Mutation, StoreError};

pub struct Repository<T, S> {
    store: S,
    pending: Mutex<Vec<Mutation<T>>>,
}

impl<T, S> Repository<T, S>
where
    T: Entity + Clone + PartialEq,
    S: EntityStore<T>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Fetch one entity by identity. Absence is a normal result.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>, StoreError> {
        self.store.find_by_id(id).await
    }

    /// Unconstrained scan. Callers needing paging should use a specification.
    pub async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        self.store.fetch_all().await
    }

    /// First entity matching the specification, if any.
    pub async fn get_one_by_spec(&self, spec: &Specification<T>) -> Result<Option<T>, StoreError> {
        let rows = self.store.fetch_all().await?;
        Ok(evaluator::evaluate(rows, spec).into_iter().next())
    }

    /// All entities matching the specification, in its order.
    pub async fn list_by_spec(&self, spec: &Specification<T>) -> Result<Vec<T>, StoreError> {
        let rows = self.store.fetch_all().await?;
        Ok(evaluator::evaluate(rows, spec))
    }

    /// All projected values produced by the specification.
    pub async fn list_projected<R>(
        &self,
        spec: &ProjectionSpecification<T, R>,
    ) -> Result<Vec<R>, StoreError>
    where
        R: PartialEq,
    {
        let rows = self.store.fetch_all().await?;
        Ok(evaluator::evaluate_projected(rows, spec))
    }

    /// First projected value produced by the specification, if any.
    pub async fn get_one_projected<R>(
        &self,
        spec: &ProjectionSpecification<T, R>,
    ) -> Result<Option<R>, StoreError>
    where
        R: PartialEq,
    {
        let rows = self.store.fetch_all().await?;
        Ok(evaluator::evaluate_projected(rows, spec).into_iter().next())
    }

    /// How many entities match the specification's filter. Paging, ordering
    /// and distinct on the specification are ignored: this answers "how many
    /// total results match these filters", not "how big is the page".
    pub async fn count_by_spec(&self, spec: &Specification<T>) -> Result<usize, StoreError> {
        let rows = self.store.fetch_all().await?;
        Ok(evaluator::matching_count(&rows, spec))
    }

    pub async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        self.store.exists(id).await
    }

    /// Stage an insert. Nothing is persisted until `save_changes`.
    pub fn add(&self, entity: T) {
        self.pending.lock().push(Mutation::Add(entity));
    }

    /// Stage an update of an existing entity, matched by identity.
    pub fn update(&self, entity: T) {
        self.pending.lock().push(Mutation::Update(entity));
    }

    /// Stage a removal, matched by identity.
    pub fn remove(&self, entity: T) {
        self.pending.lock().push(Mutation::Remove(entity));
    }

    /// Commit all staged mutations as one unit. Returns whether any row was
    /// affected; zero rows is a normal `false`, not an error.
    pub async fn save_changes(&self) -> Result<bool, StoreError> {
        Ok(self.commit_pending().await?.rows_affected > 0)
    }

    /// Commit all staged mutations and return the full outcome, including
    /// the stored rows created by staged adds.
    pub async fn commit_pending(&self) -> Result<CommitOutcome<T>, StoreError> {
        let staged = {
            let mut pending = self.pending.lock();
            std::mem::take(&mut *pending)
        };
        if staged.is_empty() {
            return Ok(CommitOutcome::default());
        }
        self.store.commit(staged).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::catalog::fixtures::product;
    use crate::catalog::Product;
    use crate::query::memory::MemoryStore;

    fn seeded_repository() -> Repository<Product, MemoryStore<Product>> {
        let store = MemoryStore::with_rows(vec![
            product(1, "Court Classic", "Nike", "Boots", 10),
            product(2, "Trail Runner", "Nike", "Boots", 5),
            product(3, "Street Low", "Adidas", "Boots", 7),
        ]);
        Repository::new(store)
    }

    #[tokio::test]
    async fn get_by_id_returns_absent_for_missing_entity() {
        let repo = seeded_repository();
        assert_matches!(repo.get_by_id(1).await, Ok(Some(p)) if p.name == "Court Classic");
        assert_matches!(repo.get_by_id(99).await, Ok(None));
    }

    #[tokio::test]
    async fn list_by_spec_without_criteria_matches_list_all() {
        let repo = seeded_repository();
        let all = repo.list_all().await.unwrap();
        let listed = repo.list_by_spec(&Specification::new()).await.unwrap();
        assert_eq!(all, listed);
    }

    #[tokio::test]
    async fn get_one_by_spec_returns_first_match() {
        let repo = seeded_repository();
        let spec = Specification::new()
            .filtered(|p: &Product| p.brand == "Nike")
            .order_by(|p| p.price);
        let found = repo.get_one_by_spec(&spec).await.unwrap().unwrap();
        assert_eq!(found.id, 2);

        let none = repo
            .get_one_by_spec(&Specification::new().filtered(|p: &Product| p.brand == "Puma"))
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn count_ignores_the_page_window() {
        let repo = seeded_repository();
        let spec = Specification::new()
            .filtered(|p: &Product| p.brand == "Nike")
            .paginate(0, 1);
        assert_eq!(repo.count_by_spec(&spec).await.unwrap(), 2);
        assert_eq!(repo.list_by_spec(&spec).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_then_save_assigns_identity() {
        let repo = seeded_repository();
        repo.add(product(0, "Gym Flex", "Puma", "Gloves", 12));
        let outcome = repo.commit_pending().await.unwrap();
        assert_eq!(outcome.rows_affected, 1);
        assert_eq!(outcome.created.len(), 1);
        let created = &outcome.created[0];
        assert_eq!(created.id, 4);
        assert_matches!(repo.get_by_id(4).await, Ok(Some(_)));
    }

    #[tokio::test]
    async fn update_of_missing_entity_affects_no_rows() {
        let repo = seeded_repository();
        repo.update(product(99, "Ghost", "Nike", "Boots", 1));
        assert_eq!(repo.save_changes().await.unwrap(), false);
    }

    #[tokio::test]
    async fn save_with_nothing_staged_reports_false() {
        let repo = seeded_repository();
        assert_eq!(repo.save_changes().await.unwrap(), false);
    }

    #[tokio::test]
    async fn remove_then_save_deletes_the_row() {
        let repo = seeded_repository();
        let target = repo.get_by_id(2).await.unwrap().unwrap();
        repo.remove(target);
        assert_eq!(repo.save_changes().await.unwrap(), true);
        assert_matches!(repo.get_by_id(2).await, Ok(None));
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn staged_mutations_commit_as_one_batch() {
        let repo = seeded_repository();
        let mut renamed = repo.get_by_id(1).await.unwrap().unwrap();
        renamed.name = "Court Classic II".to_string();
        repo.update(renamed);
        repo.add(product(0, "Box Fresh", "Puma", "Hats", 3));
        assert_eq!(repo.save_changes().await.unwrap(), true);

        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().name, "Court Classic II");
        assert_eq!(repo.list_all().await.unwrap().len(), 4);
        // The batch was drained; a second save has nothing left to commit.
        assert_eq!(repo.save_changes().await.unwrap(), false);
    }

    #[tokio::test]
    async fn exists_checks_identity_only() {
        let repo = seeded_repository();
        assert!(repo.exists(3).await.unwrap());
        assert!(!repo.exists(42).await.unwrap());
    }
}
