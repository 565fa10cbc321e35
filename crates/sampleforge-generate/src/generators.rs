//! Field generators for the three record kinds.
//!
//! Each generator is a pure function over an RNG and a timestamp anchor and
//! returns one freshly populated record. Generation cannot fail: every field
//! is drawn from a bounded uniform range or a fixed vocabulary.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::records::{FieldValue, Record, RecordKind};

pub const TRANSACTION_STATUSES: &[&str] = &["completed", "pending", "cancelled"];
pub const PAYMENT_METHODS: &[&str] = &["credit_card", "debit_card", "paypal", "bank_transfer"];
pub const REGIONS: &[&str] = &["North", "South", "East", "West"];

pub const CUSTOMER_STATUSES: &[&str] = &["active", "inactive", "suspended"];
pub const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa",
];
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];

pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics", "Clothing", "Food", "Books", "Home", "Sports",
];

/// Generate `rows` records of the given kind.
pub fn generate(
    kind: RecordKind,
    rows: u64,
    rng: &mut impl Rng,
    anchor: NaiveDateTime,
) -> Vec<Record> {
    let mut records = Vec::with_capacity(rows as usize);
    for _ in 0..rows {
        records.push(match kind {
            RecordKind::Transactions => transaction(rng, anchor),
            RecordKind::Customers => customer(rng, anchor),
            RecordKind::Products => product(rng, anchor),
        });
    }
    records
}

/// One sales transaction.
pub fn transaction(rng: &mut impl Rng, anchor: NaiveDateTime) -> Record {
    let mut record = Record::with_capacity(9);
    record.push(
        "transaction_id",
        FieldValue::Text(format!("TXN{}", rng.random_range(100000..=999999))),
    );
    record.push(
        "customer_id",
        FieldValue::Text(format!("CUST{}", rng.random_range(1000..=9999))),
    );
    record.push(
        "product_id",
        FieldValue::Text(format!("PROD{}", rng.random_range(100..=999))),
    );
    record.push(
        "amount",
        FieldValue::Float(round_to(rng.random_range(10.0..=1000.0), 2)),
    );
    record.push("quantity", FieldValue::Int(rng.random_range(1..=10)));
    record.push(
        "timestamp",
        FieldValue::Timestamp(days_before(anchor, rng, 365)),
    );
    record.push("status", choose(TRANSACTION_STATUSES, rng));
    record.push("payment_method", choose(PAYMENT_METHODS, rng));
    record.push("region", choose(REGIONS, rng));
    record
}

/// One customer profile.
pub fn customer(rng: &mut impl Rng, anchor: NaiveDateTime) -> Record {
    let mut record = Record::with_capacity(8);
    record.push(
        "customer_id",
        FieldValue::Text(format!("CUST{}", rng.random_range(1000..=9999))),
    );
    record.push("first_name", choose(FIRST_NAMES, rng));
    record.push("last_name", choose(LAST_NAMES, rng));
    record.push(
        "email",
        FieldValue::Text(format!("user{}@example.com", rng.random_range(1..=9999))),
    );
    record.push(
        "phone",
        FieldValue::Text(format!(
            "+1-555-{}-{}",
            rng.random_range(100..=999),
            rng.random_range(1000..=9999)
        )),
    );
    record.push(
        "registration_date",
        FieldValue::Timestamp(days_before(anchor, rng, 730)),
    );
    record.push("loyalty_points", FieldValue::Int(rng.random_range(0..=10000)));
    record.push("status", choose(CUSTOMER_STATUSES, rng));
    record
}

/// One catalog product.
pub fn product(rng: &mut impl Rng, anchor: NaiveDateTime) -> Record {
    let mut record = Record::with_capacity(8);
    record.push(
        "product_id",
        FieldValue::Text(format!("PROD{}", rng.random_range(100..=999))),
    );
    record.push(
        "name",
        FieldValue::Text(format!("Product {}", rng.random_range(1..=100))),
    );
    record.push("category", choose(PRODUCT_CATEGORIES, rng));
    record.push(
        "price",
        FieldValue::Float(round_to(rng.random_range(5.0..=500.0), 2)),
    );
    record.push("stock_quantity", FieldValue::Int(rng.random_range(0..=1000)));
    record.push(
        "supplier_id",
        FieldValue::Text(format!("SUP{}", rng.random_range(10..=99))),
    );
    record.push(
        "rating",
        FieldValue::Float(round_to(rng.random_range(1.0..=5.0), 1)),
    );
    record.push("created_date", FieldValue::Timestamp(days_before(anchor, rng, 1095)));
    record
}

fn choose(values: &[&str], rng: &mut impl Rng) -> FieldValue {
    let value = values.choose(rng).copied().unwrap_or_default();
    FieldValue::Text(value.to_string())
}

fn days_before(anchor: NaiveDateTime, rng: &mut impl Rng, max_days: i64) -> NaiveDateTime {
    anchor - Duration::days(rng.random_range(0..=max_days))
}

fn round_to(value: f64, scale: i32) -> f64 {
    let factor = 10_f64.powi(scale);
    (value * factor).round() / factor
}
