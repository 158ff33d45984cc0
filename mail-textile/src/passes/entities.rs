//! Whitespace and entity fixes
//!
//! Works on the serialized body rather than on nodes, then parses the result again:
//!
//!     - a space right after a newline is dropped, or Textile would read the line as a
//!       quoted block
//!     - `&nbsp;` (and `&#160;` / `&#xa0;`, any case) becomes a plain space; an entity that
//!       is already followed by a space collapses into that one space

use crate::dom;
use markup5ever_rcdom::{Handle, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io;

static NEWLINE_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n ").expect("valid regex"));
static NBSP_THEN_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&(?:#xa0|#160|nbsp); ").expect("valid regex"));
static NBSP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&(?:#xa0|#160|nbsp);").expect("valid regex"));

/// Apply the textual fixes to serialized markup.
pub fn normalize_markup(markup: &str) -> String {
    let markup = NEWLINE_SPACE.replace_all(markup, "\n");
    let markup = NBSP_THEN_SPACE.replace_all(&markup, " ");
    NBSP.replace_all(&markup, " ").into_owned()
}

/// Serialize `body`, fix it up and parse it into a fresh document.
pub fn reparse_normalized(body: &Handle) -> io::Result<RcDom> {
    let markup = normalize_markup(&dom::serialize_children(body)?);
    // An explicit <body> keeps leading whitespace in the body instead of the head.
    Ok(dom::parse(&format!("<!DOCTYPE html><body>{markup}")))
}
