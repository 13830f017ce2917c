//! Product catalog: the entity, query parameters, and the reusable
//! specifications built on the query layer.

pub mod params;
pub mod specs;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::query::Entity;

pub use params::ProductSpecParams;
pub use specs::{brand_list_spec, product_spec, type_list_spec};

/// Product record from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub picture_url: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub brand: String,
    pub quantity_in_stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A product with the fields the query tests care about; the rest are
    /// filler.
    pub fn product(id: i64, name: &str, brand: &str, product_type: &str, price: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::from(price),
            picture_url: format!("/images/products/{id}.png"),
            product_type: product_type.to_string(),
            brand: brand.to_string(),
            quantity_in_stock: 100,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
