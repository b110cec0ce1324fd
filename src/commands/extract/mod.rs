mod csv_output;
mod list_items;
mod pdf_layout;
mod run;

pub use run::run;
