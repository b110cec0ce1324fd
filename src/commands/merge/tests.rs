use std::fs;
use std::path::{Path, PathBuf};

use super::run;
use super::strategy::{merge_sources, parse_numeric_id};
use super::table::{LoadedCsv, concat_tables, read_csv_table};
use crate::cli::{MergeArgs, MergeStrategy};
use crate::model::CsvTable;

fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("fixture should be written");
    path
}

fn source(headers: &[&str], rows: &[&[&str]]) -> LoadedCsv {
    LoadedCsv {
        path: PathBuf::from("fixture.csv"),
        table: CsvTable {
            headers: headers.iter().map(|value| value.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|value| value.to_string()).collect())
                .collect(),
        },
    }
}

fn items_source(ids: &[&str]) -> LoadedCsv {
    let rows = ids
        .iter()
        .enumerate()
        .map(|(index, id)| vec![id.to_string(), format!("item {index}")])
        .collect::<Vec<Vec<String>>>();
    LoadedCsv {
        path: PathBuf::from("items.csv"),
        table: CsvTable {
            headers: vec!["id".to_string(), "items".to_string()],
            rows,
        },
    }
}

fn column(table: &CsvTable, name: &str) -> Vec<String> {
    let index = table.column_index(name).expect("column should exist");
    table.rows.iter().map(|row| row[index].clone()).collect()
}

#[test]
fn renumber_assigns_sequential_ids_across_all_inputs() {
    let sources = vec![
        items_source(&["7", "7", "x"]),
        items_source(&["1", "2", "3", "4", "5"]),
        items_source(&["", "99"]),
    ];

    let outcome = merge_sources(MergeStrategy::Renumber, sources).expect("merge should succeed");
    let expected = (1..=10).map(|id| id.to_string()).collect::<Vec<String>>();
    assert_eq!(column(&outcome.table, "id"), expected);
    assert_eq!(outcome.table.rows[3][1], "item 0");
}

#[test]
fn renumber_inserts_id_column_when_inputs_have_none() {
    let sources = vec![source(&["name"], &[&["a"], &["b"]])];

    let outcome = merge_sources(MergeStrategy::Renumber, sources).expect("merge should succeed");
    assert_eq!(outcome.table.headers, vec!["id", "name"]);
    assert_eq!(outcome.table.rows, vec![vec!["1", "a"], vec!["2", "b"]]);
}

#[test]
fn dedupe_sorts_and_keeps_first_row_per_id() {
    let outcome = merge_sources(MergeStrategy::Dedupe, vec![items_source(&["3", "1", "1", "2"])])
        .expect("merge should succeed");

    assert_eq!(column(&outcome.table, "id"), vec!["1", "2", "3"]);
    assert_eq!(column(&outcome.table, "items"), vec!["item 1", "item 3", "item 0"]);
    assert_eq!(outcome.dropped_rows, 1);
}

#[test]
fn dedupe_is_per_file_and_keeps_original_id_text() {
    let sources = vec![items_source(&["2", "1.0"]), items_source(&["01", "2"])];

    let outcome = merge_sources(MergeStrategy::Dedupe, sources).expect("merge should succeed");
    assert_eq!(column(&outcome.table, "id"), vec!["1.0", "2", "01", "2"]);
}

#[test]
fn dedupe_treats_non_numeric_ids_as_missing_and_sorts_them_last() {
    let outcome = merge_sources(
        MergeStrategy::Dedupe,
        vec![items_source(&["abc", "5", "", "4"])],
    )
    .expect("merge should succeed");

    assert_eq!(column(&outcome.table, "id"), vec!["4", "5", "abc"]);
    assert_eq!(outcome.missing_ids, 2);
    assert_eq!(outcome.dropped_rows, 1);
}

#[test]
fn dedupe_requires_id_column() {
    let sources = vec![source(&["name"], &[&["a"]])];

    let error = merge_sources(MergeStrategy::Dedupe, sources).expect_err("merge should fail");
    assert!(error.to_string().contains("missing 'id' column"));
}

#[test]
fn parse_numeric_id_accepts_numbers_and_rejects_text() {
    assert_eq!(parse_numeric_id(" 42 "), Some(42.0));
    assert_eq!(parse_numeric_id("1.5"), Some(1.5));
    assert_eq!(parse_numeric_id("NaN"), None);
    assert_eq!(parse_numeric_id("seven"), None);
    assert_eq!(parse_numeric_id(""), None);
}

#[test]
fn concat_tables_aligns_columns_by_header_name() {
    let merged = concat_tables(vec![
        source(&["id", "items"], &[&["1", "a"]]).table,
        source(&["items", "note", "id"], &[&["b", "n", "2"]]).table,
    ]);

    assert_eq!(merged.headers, vec!["id", "items", "note"]);
    assert_eq!(merged.rows, vec![vec!["1", "a", ""], vec!["2", "b", "n"]]);
}

#[test]
fn read_csv_table_pads_short_rows_and_rejects_long_rows() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let short = write_fixture(dir.path(), "short.csv", "id,items,note\n1,a\n");
    let long = write_fixture(dir.path(), "long.csv", "id,items\n1,a,extra\n");
    let empty = write_fixture(dir.path(), "empty.csv", "");

    let loaded = read_csv_table(&short).expect("short rows should load");
    assert_eq!(loaded.table.rows, vec![vec!["1", "a", ""]]);

    assert!(read_csv_table(&long).is_err());
    let error = read_csv_table(&empty).expect_err("empty file should fail");
    assert!(error.to_string().contains("no header row"));
}

#[test]
fn run_writes_merged_output_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let first = write_fixture(dir.path(), "a.csv", "id,items\n1,Apple/ red\n2,Pear\n");
    let second = write_fixture(dir.path(), "b.csv", "id,items\n1,\"Banana, yellow\"\n");
    let output_file = dir.path().join("nested").join("merged.csv");

    run(MergeArgs {
        csv_files: vec![first, second],
        output_file: output_file.clone(),
        strategy: MergeStrategy::Renumber,
    })
    .expect("merge should succeed");

    let written = fs::read_to_string(&output_file).expect("output should be readable");
    assert_eq!(
        written,
        "id,items\n1,Apple/ red\n2,Pear\n3,\"Banana, yellow\"\n"
    );
}

#[test]
fn run_leaves_no_output_when_an_input_is_missing() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let first = write_fixture(dir.path(), "a.csv", "id,items\n1,Apple\n");
    let output_file = dir.path().join("merged.csv");

    let result = run(MergeArgs {
        csv_files: vec![first, dir.path().join("missing.csv")],
        output_file: output_file.clone(),
        strategy: MergeStrategy::Dedupe,
    });

    assert!(result.is_err());
    assert!(!output_file.exists());
}
