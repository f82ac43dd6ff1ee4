use chrono::DateTime;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::store::catalog::Category;
use crate::store::catalog::CATALOG;
use crate::store::new_id;
use crate::time;
use crate::time::random_timestamp;
use crate::DECIMAL_SCALE;

pub const PRODUCT_COLUMNS: [&str; 6] = [
    "product_id",
    "product_name",
    "price",
    "category",
    "created_at",
    "updated_at",
];

// price bounds in cents
const MIN_PRICE: i64 = 200;
const MAX_PRICE: i64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: Decimal,
    pub category: Category,
    #[serde(serialize_with = "time::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize")]
    pub updated_at: DateTime<Utc>,
}

pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(MIN_PRICE..=MAX_PRICE), DECIMAL_SCALE)
}

/// Generates up to `count` products with distinct catalog names. Asking for more
/// products than the catalog holds yields the whole catalog in random order.
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Product> {
    if count > CATALOG.len() {
        warn!(
            "requested {count} products, catalog has {} names, truncating",
            CATALOG.len()
        );
    }

    let mut entries = CATALOG.to_vec();
    entries.shuffle(rng);
    entries.truncate(count);

    let mut products = Vec::with_capacity(entries.len());
    for entry in entries {
        let created_at = random_timestamp(rng, from, to);
        products.push(Product {
            product_id: new_id(rng),
            product_name: entry.name.to_string(),
            price: random_price(rng),
            category: entry.category,
            created_at,
            updated_at: created_at,
        });
    }

    products
}
