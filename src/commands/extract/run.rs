use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use super::csv_output::{build_item_records, derive_output_filename, write_items_csv};
use super::list_items::{ListItemMatcher, collect_list_items};
use super::pdf_layout::extract_pages_with_pdftotext;
use crate::cli::ExtractArgs;
use crate::model::MarkerKind;

pub fn run(args: ExtractArgs) -> Result<()> {
    info!(pdf = %args.pdf_path.display(), "starting list item extraction");

    let pages = extract_pages_with_pdftotext(&args.pdf_path)?;
    let matcher = ListItemMatcher::new()?;
    let items = collect_list_items(&pages, &matcher);

    if args.csv_path.as_path() != Path::new(".") {
        warn!(
            csv_path = %args.csv_path.display(),
            "--csv-path is ignored; writing to the working directory"
        );
    }

    let output_path = PathBuf::from(derive_output_filename(&args.pdf_path));
    let records = build_item_records(&items);
    write_items_csv(&output_path, &records)?;

    let numbered_items = items
        .iter()
        .filter(|item| item.marker_kind == MarkerKind::Numbered)
        .count();
    info!(
        pages = pages.len(),
        items = records.len(),
        bullet_items = items.len() - numbered_items,
        numbered_items,
        path = %output_path.display(),
        "extraction completed"
    );

    println!("Items saved to {}", output_path.display());
    Ok(())
}
