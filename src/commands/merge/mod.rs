mod run;
mod strategy;
mod table;
#[cfg(test)]
mod tests;

pub use run::run;
