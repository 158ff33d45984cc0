//! Links and line breaks
//!
//! Link text is not escaped, and link aliases are not produced.

use crate::dom;
use markup5ever_rcdom::Handle;

/// `<a href="url">text</a>` becomes `"text":url`. Anchors without an href are unwrapped.
pub fn rewrite_anchors(body: &Handle) -> usize {
    let anchors = dom::select(body, &["a"]);
    for anchor in &anchors {
        match dom::attr(anchor, "href") {
            Some(href) => super::wrap_trimmed(anchor, "\"", &format!("\":{href}")),
            None => dom::unwrap(anchor),
        }
    }
    anchors.len()
}

pub fn rewrite_breaks(body: &Handle) -> usize {
    let breaks = dom::select(body, &["br"]);
    for br in &breaks {
        dom::replace_with(br, vec![dom::create_text("\n")]);
    }
    breaks.len()
}
