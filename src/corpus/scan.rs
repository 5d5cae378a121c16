use log2::debug;
use scraper::{Html, Selector};
use std::collections::BTreeSet;

use crate::error::{RankError, Result};

/// Extension of documents that belong to the corpus
pub const PAGE_EXTENSION: &str = ".html";

/// Only `.html` documents are part of the corpus, everything else is skipped
pub fn is_corpus_document(name: &str) -> bool {
    name.ends_with(PAGE_EXTENSION)
}

/// Extract all distinct `href` targets of anchor tags in `html`.
///
/// No URL resolution is done. The document goes through a real HTML parser,
/// so attribute values come back the way a browser sees them: character
/// references are decoded (`q&amp;a.html` gives `q&a.html`), single quoted
/// and unquoted values are accepted, and anchors inside comments are ignored.
pub fn extract_links(html: &str) -> Result<BTreeSet<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| RankError::Parse(format!("Failed to parse <a> selector: {}", e)))?;

    let found: BTreeSet<String> = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    debug!("Found {} distinct links", found.len());

    Ok(found)
}
