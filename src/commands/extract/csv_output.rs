use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{ItemRecord, ListItem};
use crate::util::{csv_writer_for_buffer, finish_csv_buffer, write_bytes};

const OUTPUT_SUFFIX: &str = " items list output.csv";

/// `reports/q3.final.pdf` becomes `q3 items list output.csv`.
pub(super) fn derive_output_filename(pdf_path: &Path) -> String {
    let file_name = pdf_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base_name = file_name.split('.').next().unwrap_or_default();
    format!("{base_name}{OUTPUT_SUFFIX}")
}

pub(super) fn build_item_records(items: &[ListItem]) -> Vec<ItemRecord> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRecord {
            id: (index + 1) as u64,
            items: item.text.clone(),
        })
        .collect()
}

pub(super) fn write_items_csv(path: &Path, records: &[ItemRecord]) -> Result<()> {
    let mut writer = csv_writer_for_buffer();
    writer
        .write_record(["id", "items"])
        .with_context(|| format!("failed to serialize csv header: {}", path.display()))?;
    for record in records {
        writer.serialize(record).with_context(|| {
            format!("failed to serialize item {}: {}", record.id, path.display())
        })?;
    }

    let data = finish_csv_buffer(writer, path)?;
    write_bytes(path, &data)
}
