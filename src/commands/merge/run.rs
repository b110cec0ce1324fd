use anyhow::Result;
use tracing::info;

use super::strategy::merge_sources;
use super::table::read_csv_table;
use crate::cli::MergeArgs;
use crate::util::write_csv_table;

pub fn run(args: MergeArgs) -> Result<()> {
    info!(
        inputs = args.csv_files.len(),
        strategy = args.strategy.as_str(),
        output = %args.output_file.display(),
        "starting csv merge"
    );

    let mut sources = Vec::with_capacity(args.csv_files.len());
    for path in &args.csv_files {
        let source = read_csv_table(path)?;
        info!(
            path = %path.display(),
            rows = source.table.rows.len(),
            columns = source.table.headers.len(),
            "loaded csv"
        );
        sources.push(source);
    }

    let outcome = merge_sources(args.strategy, sources)?;
    write_csv_table(&args.output_file, &outcome.table)?;

    info!(
        rows = outcome.table.rows.len(),
        dropped_rows = outcome.dropped_rows,
        missing_ids = outcome.missing_ids,
        path = %args.output_file.display(),
        "csv merge completed"
    );

    println!(
        "Merged {} rows into {}",
        outcome.table.rows.len(),
        args.output_file.display()
    );
    Ok(())
}
