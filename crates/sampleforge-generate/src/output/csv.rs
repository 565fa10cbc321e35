use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::records::{FieldSpec, FieldValue, Record};

/// Write records as CSV: one header row from the schema field names, then one
/// row per record. Zero records produce no file.
pub fn write_records_csv(
    path: &Path,
    fields: &[FieldSpec],
    records: &[Record],
) -> Result<u64, csv::Error> {
    if records.is_empty() {
        return Ok(0);
    }

    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    let header: Vec<&str> = fields.iter().map(|spec| spec.name).collect();
    writer.write_record(&header)?;

    for record in records {
        let row: Vec<String> = fields
            .iter()
            .map(|spec| {
                record
                    .get(spec.name)
                    .map(FieldValue::to_csv)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
