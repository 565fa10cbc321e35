use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDateTime;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::generators;
use crate::model::{FileReport, GenerateOptions, GenerationReport};
use crate::output::OutputFormat;
use crate::records::{Record, RecordKind};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the sample data files.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Create the output directory and begin a run. The directory creation is
    /// idempotent; an existing directory is reused.
    pub fn start(&self) -> Result<GenerationRun<'_>, GenerationError> {
        std::fs::create_dir_all(&self.options.out_dir)?;

        let seed = match self.options.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        let anchor = chrono::Utc::now().naive_utc();

        info!(
            out_dir = %self.options.out_dir.display(),
            seed,
            "generation started"
        );

        Ok(GenerationRun {
            options: &self.options,
            seed,
            anchor,
            report: GenerationReport::new(seed),
            started: Instant::now(),
        })
    }

    /// Run the full sweep: all record kinds, all formats.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let mut run = self.start()?;
        for kind in RecordKind::ALL {
            run.generate_kind(kind)?;
        }
        Ok(run.finish())
    }
}

/// An in-progress run. Holds the resolved seed and the timestamp anchor so
/// every file of the run offsets from the same point in time.
#[derive(Debug)]
pub struct GenerationRun<'a> {
    options: &'a GenerateOptions,
    seed: u64,
    anchor: NaiveDateTime,
    report: GenerationReport,
    started: Instant,
}

impl GenerationRun<'_> {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate and write all three formats for one record kind. Each file
    /// gets independently generated rows, seeded from the run seed and the
    /// file name. Returns the per-file reports for this kind.
    pub fn generate_kind(&mut self, kind: RecordKind) -> Result<&[FileReport], GenerationError> {
        let first = self.report.files.len();
        let rows = self.options.rows_for(kind);

        info!(kind = kind.file_stem(), rows, "generating records");

        for format in OutputFormat::ALL {
            let file_report = match format {
                OutputFormat::Json => self.write_json(kind, rows)?,
                OutputFormat::Csv => self.write_csv(kind, rows)?,
                OutputFormat::Parquet => self.write_parquet(kind, rows)?,
            };
            if let Some(reason) = &file_report.skip_reason {
                warn!(file = %file_report.file_name, reason = %reason, "file skipped");
            } else {
                info!(
                    file = %file_report.file_name,
                    rows = file_report.rows,
                    bytes = file_report.bytes_written,
                    "file written"
                );
            }
            self.report.record_file(file_report);
        }

        Ok(&self.report.files[first..])
    }

    pub fn finish(mut self) -> GenerationResult {
        self.report.duration_ms = self.started.elapsed().as_millis() as u64;
        info!(
            files_written = self.report.files_written,
            files_skipped = self.report.files_skipped,
            rows_total = self.report.rows_total,
            bytes_written = self.report.bytes_written,
            duration_ms = self.report.duration_ms,
            "generation completed"
        );
        GenerationResult {
            out_dir: self.options.out_dir.clone(),
            report: self.report,
        }
    }

    fn rows_for_file(&self, kind: RecordKind, rows: u64, file_name: &str) -> Vec<Record> {
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(self.seed, file_name));
        generators::generate(kind, rows, &mut rng, self.anchor)
    }

    fn write_json(&self, kind: RecordKind, rows: u64) -> Result<FileReport, GenerationError> {
        let file_name = file_name(kind, OutputFormat::Json);
        let records = self.rows_for_file(kind, rows, &file_name);
        let bytes = crate::output::json::write_records_json(
            &self.options.out_dir.join(&file_name),
            &records,
        )?;
        Ok(FileReport {
            file_name,
            kind,
            format: OutputFormat::Json,
            rows,
            bytes_written: bytes,
            skip_reason: None,
        })
    }

    fn write_csv(&self, kind: RecordKind, rows: u64) -> Result<FileReport, GenerationError> {
        let file_name = file_name(kind, OutputFormat::Csv);
        let records = self.rows_for_file(kind, rows, &file_name);
        let bytes = crate::output::csv::write_records_csv(
            &self.options.out_dir.join(&file_name),
            kind.fields(),
            &records,
        )?;
        Ok(FileReport {
            file_name,
            kind,
            format: OutputFormat::Csv,
            rows,
            bytes_written: bytes,
            skip_reason: None,
        })
    }

    fn write_parquet(&self, kind: RecordKind, rows: u64) -> Result<FileReport, GenerationError> {
        let file_name = file_name(kind, OutputFormat::Parquet);

        #[cfg(feature = "parquet")]
        {
            let records = self.rows_for_file(kind, rows, &file_name);
            let bytes = crate::output::parquet::write_records_parquet(
                &self.options.out_dir.join(&file_name),
                kind.fields(),
                &records,
            )?;
            Ok(FileReport {
                file_name,
                kind,
                format: OutputFormat::Parquet,
                rows,
                bytes_written: bytes,
                skip_reason: None,
            })
        }

        #[cfg(not(feature = "parquet"))]
        {
            let _ = rows;
            Ok(FileReport {
                file_name,
                kind,
                format: OutputFormat::Parquet,
                rows: 0,
                bytes_written: 0,
                skip_reason: Some(
                    "parquet support not compiled in (enable the 'parquet' feature)".to_string(),
                ),
            })
        }
    }
}

fn file_name(kind: RecordKind, format: OutputFormat) -> String {
    format!("{}.{}", kind.file_stem(), format.extension())
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
