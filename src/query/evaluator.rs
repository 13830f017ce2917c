//! Turns a specification plus a fetched collection into a result set.
//!
//! The pipeline order is fixed: filter, then ordering (at most one), then
//! projection (projected variant only), then the paging window, then
//! distinct. Distinct runs last; equality is defined on the projected type.
//! An empty result is a normal outcome, not an error.

use crate::query::specification::{ProjectionSpecification, Specification};

/// Evaluate a specification against a fetched collection.
pub fn evaluate<T>(source: Vec<T>, spec: &Specification<T>) -> Vec<T>
where
    T: PartialEq,
{
    let mut items: Vec<T> = match spec.criteria() {
        Some(criteria) => source.into_iter().filter(|item| criteria(item)).collect(),
        None => source,
    };

    if let Some(comparator) = spec.comparator() {
        items.sort_by(|a, b| comparator(a, b));
    }

    if spec.is_paging_enabled() {
        items = items
            .into_iter()
            .skip(spec.skip())
            .take(spec.take())
            .collect();
    }

    if spec.is_distinct() {
        items = dedup_in_order(items);
    }

    items
}

/// Evaluate a projecting specification. The projection runs before the
/// paging window is applied.
pub fn evaluate_projected<T, R>(source: Vec<T>, spec: &ProjectionSpecification<T, R>) -> Vec<R>
where
    R: PartialEq,
{
    let base = spec.base();

    let mut items: Vec<T> = match base.criteria() {
        Some(criteria) => source.into_iter().filter(|item| criteria(item)).collect(),
        None => source,
    };

    if let Some(comparator) = base.comparator() {
        items.sort_by(|a, b| comparator(a, b));
    }

    let select = spec.selector();
    let mut projected: Vec<R> = items.iter().map(|item| select(item)).collect();

    if base.is_paging_enabled() {
        projected = projected
            .into_iter()
            .skip(base.skip())
            .take(base.take())
            .collect();
    }

    if base.is_distinct() {
        projected = dedup_in_order(projected);
    }

    projected
}

/// Count the entities matching a specification's criteria. Ordering, paging
/// and distinct do not affect the count.
pub fn matching_count<T>(source: &[T], spec: &Specification<T>) -> usize {
    match spec.criteria() {
        Some(criteria) => source.iter().filter(|item| criteria(item)).count(),
        None => source.len(),
    }
}

/// Remove duplicates, keeping the first occurrence of each value.
fn dedup_in_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
