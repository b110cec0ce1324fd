use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::model::CsvTable;

#[derive(Debug, Clone)]
pub(super) struct LoadedCsv {
    pub path: PathBuf,
    pub table: CsvTable,
}

pub(super) fn read_csv_table(path: &Path) -> Result<LoadedCsv> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open csv: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read csv header: {}", path.display()))?
        .iter()
        .map(ToOwned::to_owned)
        .collect::<Vec<String>>();

    if headers.iter().all(|header| header.trim().is_empty()) {
        bail!("csv has no header row: {}", path.display());
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("failed to read row {} of {}", index + 1, path.display()))?;
        if record.len() > headers.len() {
            bail!(
                "row {} of {} has {} fields but the header has {}",
                index + 1,
                path.display(),
                record.len(),
                headers.len()
            );
        }

        let mut row = record
            .iter()
            .map(ToOwned::to_owned)
            .collect::<Vec<String>>();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(LoadedCsv {
        path: path.to_path_buf(),
        table: CsvTable { headers, rows },
    })
}

/// Stacks tables under the union of their headers, in order of first appearance.
pub(super) fn concat_tables(tables: Vec<CsvTable>) -> CsvTable {
    let mut headers = Vec::<String>::new();
    for table in &tables {
        for header in &table.headers {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
    }

    let mut rows = Vec::new();
    for table in tables {
        let column_map = headers
            .iter()
            .map(|header| table.column_index(header))
            .collect::<Vec<Option<usize>>>();

        for row in table.rows {
            rows.push(
                column_map
                    .iter()
                    .map(|index| {
                        index
                            .and_then(|index| row.get(index).cloned())
                            .unwrap_or_default()
                    })
                    .collect(),
            );
        }
    }

    CsvTable { headers, rows }
}
