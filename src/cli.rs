use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "pdf-list-items",
    version,
    about = "Extract bullet and numbered list items from PDFs into CSV, and merge CSV files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts list items from a PDF and saves them to a CSV file.
    ExtractAndSave(ExtractArgs),
    /// Merges several CSV files into one.
    MergeCsvFiles(MergeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// The path to the PDF file.
    pub pdf_path: PathBuf,

    /// Path to save the extracted items. Currently ignored: the CSV is always
    /// written to the working directory under a name derived from the PDF.
    #[arg(long, default_value = ".")]
    pub csv_path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Input CSV files, concatenated in the order given.
    #[arg(required = true)]
    pub csv_files: Vec<PathBuf>,

    #[arg(long, default_value = "output.csv")]
    pub output_file: PathBuf,

    #[arg(long, value_enum, default_value_t = MergeStrategy::Renumber)]
    pub strategy: MergeStrategy,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MergeStrategy {
    /// Concatenate all rows and assign fresh ids 1..N.
    Renumber,
    /// Sort each file by numeric id and drop repeated ids, keeping original ids.
    Dedupe,
}

impl MergeStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Renumber => "renumber",
            Self::Dedupe => "dedupe",
        }
    }
}
