//! Synthetic business-record generation for data-ingestion demos.
//!
//! Fabricates transactions, customers, and products and writes them as JSON,
//! CSV, and (when the `parquet` feature is enabled) Parquet files.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod records;

pub use engine::{GenerationEngine, GenerationResult, GenerationRun};
pub use errors::GenerationError;
pub use model::{FileReport, GenerateOptions, GenerationReport};
pub use output::OutputFormat;
pub use records::{FieldType, FieldValue, Record, RecordKind};
