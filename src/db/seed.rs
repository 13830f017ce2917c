//! Pre-seed data for initial database setup.
//!
//! Inserts the default product catalog when the products table is empty.
//! Re-runs are no-ops once any product exists, so user edits survive
//! restarts.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info, warn};

/// Result of running seed operations.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub products_inserted: u64,
    pub errors: Vec<String>,
}

#[derive(Debug)]
struct ProductRow {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    picture_url: &'static str,
    product_type: &'static str,
    brand: &'static str,
    quantity_in_stock: i32,
}

const PRODUCT_ROWS: &[ProductRow] = &[
    ProductRow {
        name: "Angular Speedster Board 2000",
        description: "Fast-turning board with a reinforced deck for daily commutes.",
        price_cents: 20000,
        picture_url: "/images/products/sb-ang1.png",
        product_type: "Boards",
        brand: "Angular",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Green Angular Board 3000",
        description: "Lightweight green board tuned for carving.",
        price_cents: 15000,
        picture_url: "/images/products/sb-ang2.png",
        product_type: "Boards",
        brand: "Angular",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Core Board Speed Rush 3",
        description: "Stiff competition deck with a grippy top sheet.",
        price_cents: 18000,
        picture_url: "/images/products/sb-core1.png",
        product_type: "Boards",
        brand: "NetCore",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Net Core Super Board",
        description: "Long-wheelbase cruiser for stable high-speed runs.",
        price_cents: 30000,
        picture_url: "/images/products/sb-core2.png",
        product_type: "Boards",
        brand: "NetCore",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "React Board Super Whizzy Fast",
        description: "Responsive board that turns on a dime.",
        price_cents: 25000,
        picture_url: "/images/products/sb-react1.png",
        product_type: "Boards",
        brand: "React",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Typescript Entry Board",
        description: "Forgiving starter board for first-time riders.",
        price_cents: 12000,
        picture_url: "/images/products/sb-ts1.png",
        product_type: "Boards",
        brand: "TypeScript",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Core Blue Hat",
        description: "Knitted blue beanie with a fleece lining.",
        price_cents: 1000,
        picture_url: "/images/products/hat-core1.png",
        product_type: "Hats",
        brand: "NetCore",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Green React Woolen Hat",
        description: "Warm woolen hat for cold-morning sessions.",
        price_cents: 800,
        picture_url: "/images/products/hat-react1.png",
        product_type: "Hats",
        brand: "React",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Purple React Woolen Hat",
        description: "Woolen hat in deep purple with a rolled cuff.",
        price_cents: 1500,
        picture_url: "/images/products/hat-react2.png",
        product_type: "Hats",
        brand: "React",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Blue Code Gloves",
        description: "Padded gloves with reinforced palms.",
        price_cents: 1800,
        picture_url: "/images/products/glove-code1.png",
        product_type: "Gloves",
        brand: "VS Code",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Green Code Gloves",
        description: "Breathable summer gloves with mesh backs.",
        price_cents: 1500,
        picture_url: "/images/products/glove-code2.png",
        product_type: "Gloves",
        brand: "VS Code",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Purple React Gloves",
        description: "Insulated gloves with touchscreen fingertips.",
        price_cents: 1600,
        picture_url: "/images/products/glove-react1.png",
        product_type: "Gloves",
        brand: "React",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Green React Gloves",
        description: "Slim-fit gloves with a silicone grip pattern.",
        price_cents: 1400,
        picture_url: "/images/products/glove-react2.png",
        product_type: "Gloves",
        brand: "React",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Redis Red Boots",
        description: "High-cuff boots with double-stitched seams.",
        price_cents: 25000,
        picture_url: "/images/products/boot-redis1.png",
        product_type: "Boots",
        brand: "Redis",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Core Red Boots",
        description: "All-weather boots with a thermal liner.",
        price_cents: 18999,
        picture_url: "/images/products/boot-core1.png",
        product_type: "Boots",
        brand: "NetCore",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Purple Core Boots",
        description: "Quick-lace boots with shock-absorbing soles.",
        price_cents: 19999,
        picture_url: "/images/products/boot-core2.png",
        product_type: "Boots",
        brand: "NetCore",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Angular Purple Boots",
        description: "Flexible freestyle boots in matte purple.",
        price_cents: 15000,
        picture_url: "/images/products/boot-ang1.png",
        product_type: "Boots",
        brand: "Angular",
        quantity_in_stock: 100,
    },
    ProductRow {
        name: "Angular Blue Boots",
        description: "Stiff-flex boots for aggressive riding.",
        price_cents: 18000,
        picture_url: "/images/products/boot-ang2.png",
        product_type: "Boots",
        brand: "Angular",
        quantity_in_stock: 100,
    },
];

/// Seed the default product catalog. Skipped when any product already exists.
async fn seed_products(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        debug!(existing, "Products already present, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0u64;

    for row in PRODUCT_ROWS {
        let r = sqlx::query(
            r#"
            INSERT INTO products
                (name, description, price, picture_url, product_type, brand, quantity_in_stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(row.name)
        .bind(row.description)
        .bind(Decimal::new(row.price_cents, 2))
        .bind(row.picture_url)
        .bind(row.product_type)
        .bind(row.brand)
        .bind(row.quantity_in_stock)
        .execute(pool)
        .await?;

        inserted += r.rows_affected();
    }

    Ok(inserted)
}

/// Run all seed routines. Failures are reported, not fatal.
pub async fn run_seeds(pool: &PgPool) -> SeedResult {
    let mut result = SeedResult::default();

    match seed_products(pool).await {
        Ok(n) => {
            result.products_inserted = n;
            if n > 0 {
                info!(count = n, "Seeded product catalog");
            }
        }
        Err(e) => {
            let msg = format!("Seed products: {}", e);
            warn!("{}", msg);
            result.errors.push(msg);
        }
    }

    result
}
