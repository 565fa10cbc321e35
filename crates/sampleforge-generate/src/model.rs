use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::records::RecordKind;

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the data files are written.
    pub out_dir: PathBuf,
    /// Seed for deterministic output. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Records per transaction file.
    pub transactions: u64,
    /// Records per customer file.
    pub customers: u64,
    /// Records per product file.
    pub products: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("sample-data"),
            seed: None,
            transactions: RecordKind::Transactions.default_rows(),
            customers: RecordKind::Customers.default_rows(),
            products: RecordKind::Products.default_rows(),
        }
    }
}

impl GenerateOptions {
    pub fn rows_for(&self, kind: RecordKind) -> u64 {
        match kind {
            RecordKind::Transactions => self.transactions,
            RecordKind::Customers => self.customers,
            RecordKind::Products => self.products,
        }
    }
}

/// Outcome of one kind x format combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file_name: String,
    pub kind: RecordKind,
    pub format: OutputFormat,
    pub rows: u64,
    pub bytes_written: u64,
    /// Present when the file was skipped instead of written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
}

impl FileReport {
    pub fn written(&self) -> bool {
        self.skip_reason.is_none()
    }
}

/// Report for a generation run. Held in memory and returned to the caller so
/// the output directory contains only the data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub files: Vec<FileReport>,
    pub rows_total: u64,
    pub bytes_written: u64,
    pub files_written: u64,
    pub files_skipped: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            files: Vec::new(),
            rows_total: 0,
            bytes_written: 0,
            files_written: 0,
            files_skipped: 0,
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, file: FileReport) {
        if file.written() {
            self.files_written += 1;
            self.rows_total += file.rows;
            self.bytes_written += file.bytes_written;
        } else {
            self.files_skipped += 1;
        }
        self.files.push(file);
    }
}
