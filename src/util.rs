use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::CsvTable;

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn csv_writer_for_buffer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

pub fn finish_csv_buffer(writer: csv::Writer<Vec<u8>>, path: &Path) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|err| err.into_error())
        .with_context(|| format!("failed to serialize csv: {}", path.display()))
}

/// Writes the table in one step once it is fully serialized.
pub fn write_csv_table(path: &Path, table: &CsvTable) -> Result<()> {
    let mut writer = csv_writer_for_buffer();
    writer
        .write_record(&table.headers)
        .with_context(|| format!("failed to serialize csv header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("failed to serialize csv row: {}", path.display()))?;
    }

    let data = finish_csv_buffer(writer, path)?;
    write_bytes(path, &data)
}

pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(path, data).with_context(|| format!("failed to write file: {}", path.display()))
}
