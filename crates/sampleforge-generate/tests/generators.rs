use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sampleforge_generate::generators::{
    self, CUSTOMER_STATUSES, FIRST_NAMES, LAST_NAMES, PAYMENT_METHODS, PRODUCT_CATEGORIES,
    REGIONS, TRANSACTION_STATUSES,
};
use sampleforge_generate::{FieldValue, RecordKind};

fn anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 1)
        .expect("valid date")
        .and_hms_opt(12, 30, 0)
        .expect("valid time")
}

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn text<'a>(record: &'a sampleforge_generate::Record, name: &str) -> &'a str {
    record
        .get(name)
        .and_then(FieldValue::as_str)
        .unwrap_or_else(|| panic!("missing text field '{name}'"))
}

#[test]
fn records_match_their_field_schema() {
    let mut rng = seeded(1);
    for kind in RecordKind::ALL {
        for _ in 0..50 {
            let records = generators::generate(kind, 1, &mut rng, anchor());
            let record = &records[0];

            let expected: Vec<&str> = kind.fields().iter().map(|spec| spec.name).collect();
            let actual: Vec<&str> = record.names().collect();
            assert_eq!(actual, expected, "field names for {kind:?}");

            for spec in kind.fields() {
                let value = record.get(spec.name).expect("field present");
                assert_eq!(
                    value.field_type(),
                    spec.field_type,
                    "type of {}.{}",
                    kind.file_stem(),
                    spec.name
                );
            }
        }
    }
}

#[test]
fn transaction_values_stay_in_bounds() {
    let mut rng = seeded(2);
    for _ in 0..200 {
        let record = generators::transaction(&mut rng, anchor());

        let id = text(&record, "transaction_id");
        let suffix: u64 = id.strip_prefix("TXN").expect("TXN prefix").parse().expect("numeric id");
        assert!((100000..=999999).contains(&suffix));

        let customer: u64 = text(&record, "customer_id")
            .strip_prefix("CUST")
            .expect("CUST prefix")
            .parse()
            .expect("numeric id");
        assert!((1000..=9999).contains(&customer));

        let product: u64 = text(&record, "product_id")
            .strip_prefix("PROD")
            .expect("PROD prefix")
            .parse()
            .expect("numeric id");
        assert!((100..=999).contains(&product));

        let amount = record.get("amount").and_then(FieldValue::as_f64).expect("amount");
        assert!((10.0..=1000.0).contains(&amount));
        assert!(
            (amount * 100.0 - (amount * 100.0).round()).abs() < 1e-6,
            "amount has at most two decimals: {amount}"
        );

        let quantity = record.get("quantity").and_then(FieldValue::as_i64).expect("quantity");
        assert!((1..=10).contains(&quantity));

        assert!(TRANSACTION_STATUSES.contains(&text(&record, "status")));
        assert!(PAYMENT_METHODS.contains(&text(&record, "payment_method")));
        assert!(REGIONS.contains(&text(&record, "region")));

        let timestamp = record
            .get("timestamp")
            .and_then(FieldValue::as_timestamp)
            .expect("timestamp");
        assert!(timestamp <= anchor());
        assert!(timestamp >= anchor() - Duration::days(365));
    }
}

#[test]
fn customer_values_stay_in_bounds() {
    let mut rng = seeded(3);
    for _ in 0..200 {
        let record = generators::customer(&mut rng, anchor());

        assert!(FIRST_NAMES.contains(&text(&record, "first_name")));
        assert!(LAST_NAMES.contains(&text(&record, "last_name")));
        assert!(CUSTOMER_STATUSES.contains(&text(&record, "status")));

        let email = text(&record, "email");
        assert!(email.starts_with("user"));
        assert!(email.ends_with("@example.com"));

        let phone = text(&record, "phone");
        assert!(phone.starts_with("+1-555-"));

        let points = record
            .get("loyalty_points")
            .and_then(FieldValue::as_i64)
            .expect("loyalty_points");
        assert!((0..=10000).contains(&points));

        let registered = record
            .get("registration_date")
            .and_then(FieldValue::as_timestamp)
            .expect("registration_date");
        assert!(registered <= anchor());
        assert!(registered >= anchor() - Duration::days(730));
    }
}

#[test]
fn product_values_stay_in_bounds() {
    let mut rng = seeded(4);
    for _ in 0..200 {
        let record = generators::product(&mut rng, anchor());

        assert!(PRODUCT_CATEGORIES.contains(&text(&record, "category")));
        assert!(text(&record, "name").starts_with("Product "));
        assert!(text(&record, "supplier_id").starts_with("SUP"));

        let price = record.get("price").and_then(FieldValue::as_f64).expect("price");
        assert!((5.0..=500.0).contains(&price));

        let stock = record
            .get("stock_quantity")
            .and_then(FieldValue::as_i64)
            .expect("stock_quantity");
        assert!((0..=1000).contains(&stock));

        let rating = record.get("rating").and_then(FieldValue::as_f64).expect("rating");
        assert!((1.0..=5.0).contains(&rating));
        assert!(
            (rating * 10.0 - (rating * 10.0).round()).abs() < 1e-6,
            "rating has at most one decimal: {rating}"
        );

        let created = record
            .get("created_date")
            .and_then(FieldValue::as_timestamp)
            .expect("created_date");
        assert!(created <= anchor());
        assert!(created >= anchor() - Duration::days(1095));
    }
}

#[test]
fn same_seed_and_anchor_produce_identical_records() {
    for kind in RecordKind::ALL {
        let mut rng_a = seeded(42);
        let mut rng_b = seeded(42);

        let records_a = generators::generate(kind, 25, &mut rng_a, anchor());
        let records_b = generators::generate(kind, 25, &mut rng_b, anchor());
        assert_eq!(records_a, records_b, "{kind:?} should be deterministic");

        let mut rng_c = seeded(43);
        let records_c = generators::generate(kind, 25, &mut rng_c, anchor());
        assert_ne!(records_a, records_c, "{kind:?} should vary by seed");
    }
}
