use chrono::NaiveDateTime;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Scalar value carried by one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Timestamp(_) => FieldType::Timestamp,
        }
    }

    pub fn to_csv(&self) -> String {
        match self {
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Float(value) => value.to_string(),
            FieldValue::Text(value) => value.clone(),
            FieldValue::Timestamp(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Int(value) => serializer.serialize_i64(*value),
            FieldValue::Float(value) => serializer.serialize_f64(*value),
            FieldValue::Text(value) => serializer.serialize_str(value),
            FieldValue::Timestamp(value) => {
                serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
        }
    }
}

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Int,
    Float,
    Text,
    Timestamp,
}

/// One entry of a record kind's field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }
}

const TRANSACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("transaction_id", FieldType::Text),
    FieldSpec::new("customer_id", FieldType::Text),
    FieldSpec::new("product_id", FieldType::Text),
    FieldSpec::new("amount", FieldType::Float),
    FieldSpec::new("quantity", FieldType::Int),
    FieldSpec::new("timestamp", FieldType::Timestamp),
    FieldSpec::new("status", FieldType::Text),
    FieldSpec::new("payment_method", FieldType::Text),
    FieldSpec::new("region", FieldType::Text),
];

const CUSTOMER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("customer_id", FieldType::Text),
    FieldSpec::new("first_name", FieldType::Text),
    FieldSpec::new("last_name", FieldType::Text),
    FieldSpec::new("email", FieldType::Text),
    FieldSpec::new("phone", FieldType::Text),
    FieldSpec::new("registration_date", FieldType::Timestamp),
    FieldSpec::new("loyalty_points", FieldType::Int),
    FieldSpec::new("status", FieldType::Text),
];

const PRODUCT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("product_id", FieldType::Text),
    FieldSpec::new("name", FieldType::Text),
    FieldSpec::new("category", FieldType::Text),
    FieldSpec::new("price", FieldType::Float),
    FieldSpec::new("stock_quantity", FieldType::Int),
    FieldSpec::new("supplier_id", FieldType::Text),
    FieldSpec::new("rating", FieldType::Float),
    FieldSpec::new("created_date", FieldType::Timestamp),
];

/// The three record kinds the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Transactions,
    Customers,
    Products,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Transactions,
        RecordKind::Customers,
        RecordKind::Products,
    ];

    /// File name without extension, e.g. `transactions.csv` uses `transactions`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            RecordKind::Transactions => "transactions",
            RecordKind::Customers => "customers",
            RecordKind::Products => "products",
        }
    }

    /// Human label used in console sections ("transaction data").
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Transactions => "transaction",
            RecordKind::Customers => "customer",
            RecordKind::Products => "product",
        }
    }

    /// Field schema in serialization order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordKind::Transactions => TRANSACTION_FIELDS,
            RecordKind::Customers => CUSTOMER_FIELDS,
            RecordKind::Products => PRODUCT_FIELDS,
        }
    }

    pub fn default_rows(&self) -> u64 {
        match self {
            RecordKind::Transactions => 1000,
            RecordKind::Customers => 500,
            RecordKind::Products => 200,
        }
    }
}

/// One generated record: named scalar fields in schema order.
///
/// Field order is the serialization order for every output format, so the
/// struct keeps an ordered list rather than a map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
