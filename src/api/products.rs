//! Product catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{brand_list_spec, product_spec, type_list_spec, Product, ProductSpecParams};
use crate::query::StoreError;
use crate::AppState;

/// Paged envelope returned by the listing endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub page_index: usize,
    pub page_size: usize,
    pub count: usize,
    pub data: Vec<T>,
}

/// Request body for creating or replacing a product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub picture_url: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub brand: String,
    #[serde(default)]
    pub quantity_in_stock: i32,
}

fn store_error(err: StoreError) -> StatusCode {
    tracing::error!(error = %err, "Store operation failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// List products matching the filter/sort/page parameters. The count is the
/// total matching the filters, not the size of the returned page.
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductSpecParams>,
) -> Result<Json<Pagination<Product>>, StatusCode> {
    let repo = state.db.products();
    let spec = product_spec(&params);

    let data = repo.list_by_spec(&spec).await.map_err(store_error)?;
    let count = repo.count_by_spec(&spec).await.map_err(store_error)?;

    Ok(Json(Pagination {
        page_index: params.page_index(),
        page_size: params.page_size(),
        count,
        data,
    }))
}

/// Get a single product by ID
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    let repo = state.db.products();

    match repo.get_by_id(id).await.map_err(store_error)? {
        Some(product) => Ok(Json(product)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Create a new product
async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>), StatusCode> {
    let repo = state.db.products();
    let now = Utc::now();

    repo.add(Product {
        id: 0,
        name: body.name,
        description: body.description,
        price: body.price,
        picture_url: body.picture_url,
        product_type: body.product_type,
        brand: body.brand,
        quantity_in_stock: body.quantity_in_stock,
        created_at: now,
        updated_at: now,
    });

    let outcome = repo.commit_pending().await.map_err(store_error)?;
    match outcome.created.into_iter().next() {
        Some(created) => Ok((StatusCode::CREATED, Json(created))),
        None => Err(StatusCode::BAD_REQUEST),
    }
}

/// Replace an existing product
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ProductInput>,
) -> Result<Json<Product>, StatusCode> {
    let repo = state.db.products();

    let Some(existing) = repo.get_by_id(id).await.map_err(store_error)? else {
        return Err(StatusCode::NOT_FOUND);
    };

    let updated = Product {
        id,
        name: body.name,
        description: body.description,
        price: body.price,
        picture_url: body.picture_url,
        product_type: body.product_type,
        brand: body.brand,
        quantity_in_stock: body.quantity_in_stock,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    repo.update(updated.clone());
    if repo.save_changes().await.map_err(store_error)? {
        Ok(Json(updated))
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

/// Delete a product
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let repo = state.db.products();

    let Some(product) = repo.get_by_id(id).await.map_err(store_error)? else {
        return Err(StatusCode::NOT_FOUND);
    };

    repo.remove(product);
    if repo.save_changes().await.map_err(store_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

/// List the distinct brands in the catalog
async fn get_brands(State(state): State<AppState>) -> Result<Json<Vec<String>>, StatusCode> {
    let repo = state.db.products();
    let brands = repo
        .list_projected(&brand_list_spec())
        .await
        .map_err(store_error)?;
    Ok(Json(brands))
}

/// List the distinct product types in the catalog
async fn get_types(State(state): State<AppState>) -> Result<Json<Vec<String>>, StatusCode> {
    let repo = state.db.products();
    let types = repo
        .list_projected(&type_list_spec())
        .await
        .map_err(store_error)?;
    Ok(Json(types))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/brands", get(get_brands))
        .route("/products/types", get(get_types))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
