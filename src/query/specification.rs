//! Declarative query descriptions.
//!
//! A specification captures *what* to retrieve (filter, ordering, paging
//! window, projection, distinct) without touching the store. Instances are
//! built once through consuming builder methods and are immutable afterwards;
//! re-invoking a builder method overwrites that slot, and there is no way to
//! unset a slot short of building a new specification.

use std::cmp::Ordering;
use std::sync::Arc;

/// Filter predicate over an entity.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Projection from an entity to a result value.
pub type Selector<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Direction of the single ordering slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A declarative description of a query over `T`.
///
/// Holds one ordering slot: `order_by` and `order_by_descending` both write
/// to it, so the last call wins and ascending/descending can never be active
/// at the same time.
pub struct Specification<T> {
    criteria: Option<Predicate<T>>,
    order: Option<(SortDirection, Comparator<T>)>,
    skip: usize,
    take: usize,
    paging_enabled: bool,
    distinct: bool,
}

impl<T> Specification<T> {
    /// A specification that matches every entity.
    pub fn new() -> Self {
        Self {
            criteria: None,
            order: None,
            skip: 0,
            take: 0,
            paging_enabled: false,
            distinct: false,
        }
    }

    /// Set the filter predicate. Absence means "match everything".
    pub fn filtered(mut self, criteria: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.criteria = Some(Arc::new(criteria));
        self
    }

    /// Sort ascending by the given key.
    pub fn order_by<K: Ord>(mut self, key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.order = Some((
            SortDirection::Ascending,
            Arc::new(move |a, b| key(a).cmp(&key(b))),
        ));
        self
    }

    /// Sort descending by the given key.
    pub fn order_by_descending<K: Ord>(
        mut self,
        key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        self.order = Some((
            SortDirection::Descending,
            Arc::new(move |a, b| key(b).cmp(&key(a))),
        ));
        self
    }

    /// Enable paging with the given window. A `take` of zero is a valid
    /// window once paging is enabled.
    pub fn paginate(mut self, skip: usize, take: usize) -> Self {
        self.skip = skip;
        self.take = take;
        self.paging_enabled = true;
        self
    }

    /// Deduplicate results after the rest of the pipeline has run.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn criteria(&self) -> Option<&Predicate<T>> {
        self.criteria.as_ref()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.order.as_ref().map(|(direction, _)| *direction)
    }

    pub(crate) fn comparator(&self) -> Option<&Comparator<T>> {
        self.order.as_ref().map(|(_, comparator)| comparator)
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn take(&self) -> usize {
        self.take
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A specification that additionally projects each `T` to an `R`.
///
/// The projection is fixed at construction; distinct applies to the
/// projected values.
pub struct ProjectionSpecification<T, R> {
    base: Specification<T>,
    select: Selector<T, R>,
}

impl<T, R> ProjectionSpecification<T, R> {
    /// Build a specification that projects each entity with `select`.
    pub fn select(select: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        Self {
            base: Specification::new(),
            select: Arc::new(select),
        }
    }

    pub fn filtered(mut self, criteria: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.base = self.base.filtered(criteria);
        self
    }

    pub fn order_by<K: Ord>(mut self, key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.base = self.base.order_by(key);
        self
    }

    pub fn order_by_descending<K: Ord>(
        mut self,
        key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        self.base = self.base.order_by_descending(key);
        self
    }

    pub fn paginate(mut self, skip: usize, take: usize) -> Self {
        self.base = self.base.paginate(skip, take);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.base = self.base.distinct();
        self
    }

    pub fn base(&self) -> &Specification<T> {
        &self.base
    }

    pub fn selector(&self) -> &Selector<T, R> {
        &self.select
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_specification_has_no_constraints() {
        let spec = Specification::<i32>::new();
        assert!(spec.criteria().is_none());
        assert!(spec.sort_direction().is_none());
        assert!(!spec.is_paging_enabled());
        assert!(!spec.is_distinct());
    }

    #[test]
    fn repeated_setter_overwrites_its_slot() {
        let spec = Specification::<i32>::new().paginate(0, 5).paginate(10, 20);
        assert_eq!(spec.skip(), 10);
        assert_eq!(spec.take(), 20);
        assert!(spec.is_paging_enabled());
    }

    #[test]
    fn ordering_slot_is_last_wins() {
        let spec = Specification::<i32>::new()
            .order_by(|x| *x)
            .order_by_descending(|x| *x);
        assert_eq!(spec.sort_direction(), Some(SortDirection::Descending));

        let spec = Specification::<i32>::new()
            .order_by_descending(|x| *x)
            .order_by(|x| *x);
        assert_eq!(spec.sort_direction(), Some(SortDirection::Ascending));
    }

    #[test]
    fn criteria_overwrite_replaces_predicate() {
        let spec = Specification::<i32>::new()
            .filtered(|x| *x > 100)
            .filtered(|x| *x > 1);
        let criteria = spec.criteria().unwrap();
        assert!(criteria(&2));
        assert!(!criteria(&1));
    }

    #[test]
    fn zero_take_is_a_valid_window() {
        let spec = Specification::<i32>::new().paginate(0, 0);
        assert!(spec.is_paging_enabled());
        assert_eq!(spec.take(), 0);
    }

    #[test]
    fn projection_carries_base_slots() {
        let spec = ProjectionSpecification::<i32, String>::select(|x| x.to_string())
            .filtered(|x| *x % 2 == 0)
            .distinct();
        assert!(spec.base().criteria().is_some());
        assert!(spec.base().is_distinct());
        assert_eq!((spec.selector())(&42), "42");
    }
}
