//! Product store backed by Postgres.
//!
//! `fetch_all` feeds the specification evaluator; mutations arrive as one
//! staged batch and run inside a single transaction, so a batch either
//! commits whole or not at all.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::catalog::Product;
use crate::query::{CommitOutcome, EntityStore, Mutation, StoreError};

const PRODUCT_COLUMNS: &str = "id, name, description, price, picture_url, product_type, brand, \
     quantity_in_stock, created_at, updated_at";

pub struct ProductStore {
    pool: PgPool,
}

impl ProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Product> for ProductStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let record = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let records = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let found: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(found)
    }

    async fn commit(
        &self,
        mutations: Vec<Mutation<Product>>,
    ) -> Result<CommitOutcome<Product>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut outcome = CommitOutcome::default();

        for mutation in mutations {
            match mutation {
                Mutation::Add(product) => {
                    let created = sqlx::query_as::<_, Product>(&format!(
                        r#"
                        INSERT INTO products
                            (name, description, price, picture_url, product_type, brand, quantity_in_stock)
                        VALUES ($1, $2, $3, $4, $5, $6, $7)
                        RETURNING {PRODUCT_COLUMNS}
                        "#
                    ))
                    .bind(&product.name)
                    .bind(&product.description)
                    .bind(product.price)
                    .bind(&product.picture_url)
                    .bind(&product.product_type)
                    .bind(&product.brand)
                    .bind(product.quantity_in_stock)
                    .fetch_one(&mut *tx)
                    .await?;

                    outcome.rows_affected += 1;
                    outcome.created.push(created);
                }
                Mutation::Update(product) => {
                    let result = sqlx::query(
                        r#"
                        UPDATE products
                        SET name = $2, description = $3, price = $4, picture_url = $5,
                            product_type = $6, brand = $7, quantity_in_stock = $8,
                            updated_at = NOW()
                        WHERE id = $1
                        "#,
                    )
                    .bind(product.id)
                    .bind(&product.name)
                    .bind(&product.description)
                    .bind(product.price)
                    .bind(&product.picture_url)
                    .bind(&product.product_type)
                    .bind(&product.brand)
                    .bind(product.quantity_in_stock)
                    .execute(&mut *tx)
                    .await?;

                    outcome.rows_affected += result.rows_affected();
                }
                Mutation::Remove(product) => {
                    let result = sqlx::query("DELETE FROM products WHERE id = $1")
                        .bind(product.id)
                        .execute(&mut *tx)
                        .await?;

                    outcome.rows_affected += result.rows_affected();
                }
            }
        }

        tx.commit().await?;

        Ok(outcome)
    }
}
