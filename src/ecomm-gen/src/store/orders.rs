use chrono::DateTime;
use chrono::Utc;
use enum_iterator::all;
use enum_iterator::Sequence;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::Serializer;
use strum_macros::Display;
use uuid::Uuid;

use crate::error::EcommGenError;
use crate::error::Result;
use crate::round_money;
use crate::store::customers::Customer;
use crate::store::new_id;
use crate::store::products::Product;
use crate::time;
use crate::time::random_timestamp;

pub const ORDER_COLUMNS: [&str; 7] = [
    "order_id",
    "customer_id",
    "order_date",
    "status",
    "total_amount",
    "created_at",
    "updated_at",
];

pub const ORDER_ITEM_COLUMNS: [&str; 8] = [
    "order_item_id",
    "order_id",
    "product_id",
    "unit_price",
    "quantity",
    "item_price",
    "created_at",
    "updated_at",
];

pub const MIN_ITEMS: usize = 1;
pub const MAX_ITEMS: usize = 4;
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 3;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let statuses = all::<OrderStatus>().collect::<Vec<_>>();
        statuses[rng.gen_range(0..statuses.len())]
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    #[serde(serialize_with = "time::serialize")]
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    #[serde(serialize_with = "time::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub order_item_id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub item_price: Decimal,
    #[serde(serialize_with = "time::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize")]
    pub updated_at: DateTime<Utc>,
}

/// One order line before ids and timestamps are assigned.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

/// Builds an order and its items. Each item price is rounded on its own and
/// the total is the rounded sum of the already rounded item prices.
pub fn build_order<R: Rng + ?Sized>(
    rng: &mut R,
    customer: &Customer,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    lines: &[Line],
) -> (Order, Vec<OrderItem>) {
    let order_id = new_id(rng);
    let mut items = Vec::with_capacity(lines.len());
    let mut total = Decimal::ZERO;
    for line in lines {
        let unit_price = line.product.price;
        let item_price = round_money(unit_price * Decimal::from(line.quantity));
        total += item_price;

        items.push(OrderItem {
            order_item_id: new_id(rng),
            order_id,
            product_id: line.product.product_id,
            unit_price,
            quantity: line.quantity,
            item_price,
            created_at,
            updated_at: created_at,
        });
    }

    let order = Order {
        order_id,
        customer_id: customer.customer_id,
        order_date: created_at,
        status,
        total_amount: round_money(total),
        created_at,
        updated_at: created_at,
    };

    (order, items)
}

/// Generates `count` orders placed by random `customers` for random `products`.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    customers: &[Customer],
    products: &[Product],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<(Vec<Order>, Vec<OrderItem>)> {
    if count == 0 {
        return Ok((vec![], vec![]));
    }
    if customers.is_empty() {
        return Err(EcommGenError::EmptyCustomerPool);
    }
    if products.is_empty() {
        return Err(EcommGenError::EmptyProductPool);
    }

    let mut orders = Vec::with_capacity(count);
    let mut order_items = Vec::with_capacity(count * (MIN_ITEMS + MAX_ITEMS) / 2);
    let mut lines = Vec::with_capacity(MAX_ITEMS);
    for _ in 0..count {
        let created_at = random_timestamp(rng, from, to);
        let customer = customers
            .choose(rng)
            .ok_or(EcommGenError::EmptyCustomerPool)?;
        let status = OrderStatus::sample(rng);

        lines.clear();
        for _ in 0..rng.gen_range(MIN_ITEMS..=MAX_ITEMS) {
            let product = products.choose(rng).ok_or(EcommGenError::EmptyProductPool)?;
            lines.push(Line {
                product,
                quantity: rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY),
            });
        }

        let (order, items) = build_order(rng, customer, status, created_at, &lines);
        orders.push(order);
        order_items.extend(items);
    }

    Ok((orders, order_items))
}
