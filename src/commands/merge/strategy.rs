use std::cmp::Ordering;

use anyhow::{Context, Result};

use super::table::{LoadedCsv, concat_tables};
use crate::cli::MergeStrategy;
use crate::model::CsvTable;

const ID_COLUMN: &str = "id";

#[derive(Debug, Clone, Default)]
pub(super) struct MergeOutcome {
    pub table: CsvTable,
    pub dropped_rows: usize,
    pub missing_ids: usize,
}

pub(super) fn merge_sources(
    strategy: MergeStrategy,
    sources: Vec<LoadedCsv>,
) -> Result<MergeOutcome> {
    match strategy {
        MergeStrategy::Renumber => Ok(renumber_sources(sources)),
        MergeStrategy::Dedupe => dedupe_sources(sources),
    }
}

/// Concatenates everything and overwrites `id` with the final position, 1..N.
fn renumber_sources(sources: Vec<LoadedCsv>) -> MergeOutcome {
    let mut table = concat_tables(sources.into_iter().map(|source| source.table).collect());

    let id_index = match table.column_index(ID_COLUMN) {
        Some(index) => index,
        None => {
            table.headers.insert(0, ID_COLUMN.to_string());
            for row in &mut table.rows {
                row.insert(0, String::new());
            }
            0
        }
    };

    for (position, row) in table.rows.iter_mut().enumerate() {
        row[id_index] = (position + 1).to_string();
    }

    MergeOutcome {
        table,
        ..MergeOutcome::default()
    }
}

/// Sorts each source by numeric id and keeps the first row per id. Sources are
/// then stacked without renumbering, so ids may repeat across sources.
fn dedupe_sources(sources: Vec<LoadedCsv>) -> Result<MergeOutcome> {
    let mut processed = Vec::with_capacity(sources.len());
    let mut dropped_rows = 0usize;
    let mut missing_ids = 0usize;

    for source in sources {
        let id_index = source
            .table
            .column_index(ID_COLUMN)
            .with_context(|| format!("missing '{ID_COLUMN}' column in {}", source.path.display()))?;

        let CsvTable { headers, rows } = source.table;
        let row_count = rows.len();

        let mut keyed = rows
            .into_iter()
            .map(|row| (parse_numeric_id(&row[id_index]), row))
            .collect::<Vec<(Option<f64>, Vec<String>)>>();
        missing_ids += keyed.iter().filter(|(key, _)| key.is_none()).count();

        keyed.sort_by(|(left, _), (right, _)| compare_ids(*left, *right));
        keyed.dedup_by(|(later, _), (earlier, _)| later == earlier);
        dropped_rows += row_count - keyed.len();

        processed.push(CsvTable {
            headers,
            rows: keyed.into_iter().map(|(_, row)| row).collect(),
        });
    }

    Ok(MergeOutcome {
        table: concat_tables(processed),
        dropped_rows,
        missing_ids,
    })
}

/// Unparseable ids become `None` instead of failing the merge.
pub(super) fn parse_numeric_id(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

// Missing ids sort after every numeric id.
fn compare_ids(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
