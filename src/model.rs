use serde::{Deserialize, Serialize};

/// One row of the extractor's `id,items` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u64,
    pub items: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MarkerKind {
    Bullet,
    Numbered,
}

impl MarkerKind {
    pub fn from_marker(marker: &str) -> Self {
        if marker.ends_with('.') {
            Self::Numbered
        } else {
            Self::Bullet
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub marker_kind: MarkerKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfPage {
    pub blocks: Vec<TextBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLine {
    pub words: Vec<String>,
}

/// Header plus string cells, as read from or written to a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}
