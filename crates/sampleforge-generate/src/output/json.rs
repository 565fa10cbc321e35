use std::fs;
use std::path::Path;

use crate::records::Record;

/// Write records as a pretty-printed JSON array of objects.
///
/// Field order within each object follows the record's schema order.
pub fn write_records_json(path: &Path, records: &[Record]) -> Result<u64, crate::GenerationError> {
    let body = serde_json::to_vec_pretty(records)?;
    fs::write(path, &body)?;
    Ok(body.len() as u64)
}
