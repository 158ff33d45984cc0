//! Source normalization and parsing
//!
//! Newlines are whitespace in HTML, so every run of them becomes a single space before
//! parsing. Otherwise the raw line structure of the email source would leak into the
//! Textile output as spurious line breaks.

use crate::dom;
use markup5ever_rcdom::RcDom;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid regex"));
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid regex"));

/// Collapse newlines and space runs, then trim.
pub fn prepare_source(html: &str) -> String {
    let single_line = LINE_BREAKS.replace_all(html, " ");
    let collapsed = SPACE_RUNS.replace_all(&single_line, " ");
    collapsed.trim_matches(dom::is_markup_space).to_string()
}

/// Parse the prepared source and strip every `<title>`, wherever the parser put it.
pub fn create_document(html: &str) -> RcDom {
    let dom = dom::parse(&prepare_source(html));
    for title in dom::select(&dom.document, &["title"]) {
        dom::detach(&title);
    }
    dom
}
