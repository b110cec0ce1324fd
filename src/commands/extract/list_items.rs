use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{ListItem, MarkerKind, PdfPage, TextLine};

pub(super) struct ListItemMatcher {
    list_item_regex: Regex,
    whitespace_regex: Regex,
}

impl ListItemMatcher {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            list_item_regex: Regex::new(r"^\s*(?P<marker>[*-]|\d+\.)\s+(?P<body>.*)")
                .context("failed to compile list item regex")?,
            whitespace_regex: Regex::new(r"\s+").context("failed to compile whitespace regex")?,
        })
    }

    pub(super) fn normalize_line(&self, line: &str) -> String {
        self.whitespace_regex.replace_all(line, " ").into_owned()
    }

    /// Returns the marker and the untrimmed text after it, when `line` opens with one.
    pub(super) fn match_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self.list_item_regex.captures(line)?;
        let marker = captures.name("marker")?.as_str();
        let body = captures.name("body").map(|value| value.as_str()).unwrap_or("");
        Some((marker, body))
    }

    pub(super) fn extract_item(&self, line: &TextLine) -> Option<ListItem> {
        let joined = line.words.join(" ");
        let normalized = self.normalize_line(joined.trim());
        let (marker, body) = self.match_line(&normalized)?;

        Some(ListItem {
            marker_kind: MarkerKind::from_marker(marker),
            text: sanitize_item_text(body),
        })
    }
}

pub(super) fn sanitize_item_text(text: &str) -> String {
    text.replace(';', "/").replace(',', "/").trim().to_string()
}

pub(super) fn collect_list_items(pages: &[PdfPage], matcher: &ListItemMatcher) -> Vec<ListItem> {
    pages
        .iter()
        .flat_map(|page| page.blocks.iter())
        .flat_map(|block| block.lines.iter())
        .filter_map(|line| matcher.extract_item(line))
        .collect()
}
