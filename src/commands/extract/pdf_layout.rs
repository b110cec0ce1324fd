use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::model::{PdfPage, TextBlock, TextLine};

pub(super) fn extract_pages_with_pdftotext(pdf_path: &Path) -> Result<Vec<PdfPage>> {
    if !pdf_path.is_file() {
        bail!("PDF not found: {}", pdf_path.display());
    }

    let output = Command::new("pdftotext")
        .arg("-bbox-layout")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-")
        .output()
        .with_context(|| format!("failed to execute pdftotext for {}", pdf_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftotext returned non-zero exit status for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }

    let xhtml = String::from_utf8_lossy(&output.stdout);
    let parser = LayoutParser::new()?;
    Ok(parser.parse(&xhtml))
}

/// Reads the page/block/line/word tree out of `pdftotext -bbox-layout` output.
pub(super) struct LayoutParser {
    page_regex: Regex,
    block_regex: Regex,
    line_regex: Regex,
    word_regex: Regex,
}

impl LayoutParser {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            page_regex: element_regex("page").context("failed to compile page regex")?,
            block_regex: element_regex("block").context("failed to compile block regex")?,
            line_regex: element_regex("line").context("failed to compile line regex")?,
            word_regex: element_regex("word").context("failed to compile word regex")?,
        })
    }

    pub(super) fn parse(&self, xhtml: &str) -> Vec<PdfPage> {
        self.page_regex
            .captures_iter(xhtml)
            .map(|page| PdfPage {
                blocks: self
                    .block_regex
                    .captures_iter(element_body(&page))
                    .map(|block| TextBlock {
                        lines: self
                            .line_regex
                            .captures_iter(element_body(&block))
                            .map(|line| TextLine {
                                words: self
                                    .word_regex
                                    .captures_iter(element_body(&line))
                                    .map(|word| decode_xml_entities(element_body(&word)))
                                    .collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

// Matches both `<tag ...>body</tag>` and an empty `<tag .../>`.
fn element_regex(tag: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?s)<{tag}\b[^>]*?(?:/>|>(.*?)</{tag}>)"))
}

fn element_body<'h>(captures: &regex::Captures<'h>) -> &'h str {
    captures.get(1).map(|value| value.as_str()).unwrap_or("")
}

fn decode_xml_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
