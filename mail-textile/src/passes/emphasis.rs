//! Inline emphasis
//!
//! Styling is assumed to cover the whole element. Parts of a word cannot be styled.

use crate::dom;
use markup5ever_rcdom::Handle;

/// Tags rewritten by [`rewrite_emphasis`].
pub const EMPHASIS_TAGS: &[&str] = &["b", "i", "em", "strong", "ins", "u", "del", "cite"];

/// Textile delimiter for an inline tag. `span` is listed for the styled span pass.
pub fn modifier(tag: &str) -> Option<&'static str> {
    match tag {
        "b" | "strong" => Some("*"),
        "em" | "i" => Some("_"),
        "ins" | "u" => Some("+"),
        "span" => Some("%"),
        "del" => Some("-"),
        "cite" => Some("??"),
        _ => None,
    }
}

pub fn rewrite_emphasis(body: &Handle) -> usize {
    let elements = dom::select(body, EMPHASIS_TAGS);
    for element in &elements {
        if let Some(delimiter) = dom::tag_name(element).and_then(modifier) {
            super::wrap_trimmed(element, delimiter, delimiter);
        }
    }
    elements.len()
}
