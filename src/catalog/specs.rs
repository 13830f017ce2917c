//! Reusable product specifications.
//!
//! Declarative configurations over the query layer; no query logic of their
//! own.

use crate::catalog::params::ProductSpecParams;
use crate::catalog::Product;
use crate::query::{ProjectionSpecification, Specification};

/// The shop listing query: brand/type membership filter, sort token, page
/// window. An empty brand or type list leaves that dimension unfiltered.
/// Sort tokens are `"priceAsc"` and `"priceDesc"`; anything else falls back
/// to name ascending.
pub fn product_spec(params: &ProductSpecParams) -> Specification<Product> {
    let brands = params.brands();
    let types = params.types();

    let spec = Specification::new()
        .filtered(move |product: &Product| {
            (brands.is_empty() || brands.iter().any(|brand| *brand == product.brand))
                && (types.is_empty() || types.iter().any(|kind| *kind == product.product_type))
        })
        .paginate(params.skip(), params.take());

    match params.sort() {
        Some("priceAsc") => spec.order_by(|product| product.price),
        Some("priceDesc") => spec.order_by_descending(|product| product.price),
        _ => spec.order_by(|product| product.name.clone()),
    }
}

/// Distinct brand values across the catalog.
pub fn brand_list_spec() -> ProjectionSpecification<Product, String> {
    ProjectionSpecification::select(|product: &Product| product.brand.clone()).distinct()
}

/// Distinct type values across the catalog.
pub fn type_list_spec() -> ProjectionSpecification<Product, String> {
    ProjectionSpecification::select(|product: &Product| product.product_type.clone()).distinct()
}
