use std::fs;
use std::path::PathBuf;

use sampleforge_generate::{GenerateOptions, GenerationEngine, RecordKind};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("sampleforge_engine_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn options_for(out_dir: PathBuf) -> GenerateOptions {
    GenerateOptions {
        out_dir,
        seed: Some(7),
        transactions: 30,
        customers: 20,
        products: 10,
    }
}

fn expected_rows(kind: RecordKind) -> u64 {
    match kind {
        RecordKind::Transactions => 30,
        RecordKind::Customers => 20,
        RecordKind::Products => 10,
    }
}

#[test]
fn full_sweep_covers_every_kind_and_format() {
    let out_dir = temp_out_dir("sweep");
    let engine = GenerationEngine::new(options_for(out_dir.clone()));
    let result = engine.run().expect("run generation");

    assert_eq!(result.report.seed, 7);
    assert_eq!(result.report.files.len(), 9);

    for kind in RecordKind::ALL {
        let rows = expected_rows(kind);

        let json_path = out_dir.join(format!("{}.json", kind.file_stem()));
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).expect("read json"))
                .expect("parse json");
        assert_eq!(
            parsed.as_array().map(|rows| rows.len()),
            Some(rows as usize),
            "{} json rows",
            kind.file_stem()
        );

        let csv_path = out_dir.join(format!("{}.csv", kind.file_stem()));
        let csv_body = fs::read_to_string(&csv_path).expect("read csv");
        assert_eq!(
            csv_body.lines().count() as u64,
            rows + 1,
            "{} csv lines",
            kind.file_stem()
        );

        let parquet_path = out_dir.join(format!("{}.parquet", kind.file_stem()));
        if cfg!(feature = "parquet") {
            assert!(parquet_path.exists(), "{} parquet file", kind.file_stem());
        } else {
            assert!(
                !parquet_path.exists(),
                "{} parquet must be skipped",
                kind.file_stem()
            );
        }
    }

    if cfg!(feature = "parquet") {
        assert_eq!(result.report.files_written, 9);
        assert_eq!(result.report.files_skipped, 0);
    } else {
        assert_eq!(result.report.files_written, 6);
        assert_eq!(result.report.files_skipped, 3);
        for file in &result.report.files {
            if file.file_name.ends_with(".parquet") {
                assert!(file.skip_reason.is_some());
            }
        }
    }
}

#[test]
fn rerun_into_existing_directory_succeeds() {
    let out_dir = temp_out_dir("rerun");
    let engine = GenerationEngine::new(options_for(out_dir.clone()));

    engine.run().expect("first run");
    let second = engine.run().expect("second run reuses the directory");

    assert_eq!(second.out_dir, out_dir);
}

#[test]
fn default_options_match_the_documented_run() {
    let options = GenerateOptions::default();
    assert_eq!(options.out_dir, PathBuf::from("sample-data"));
    assert_eq!(options.seed, None);
    assert_eq!(options.rows_for(RecordKind::Transactions), 1000);
    assert_eq!(options.rows_for(RecordKind::Customers), 500);
    assert_eq!(options.rows_for(RecordKind::Products), 200);
}
