//! Span reduction
//!
//! Textile cannot nest styled spans, so spans are reduced in three rounds, each one
//! re-selecting the spans still in the tree, innermost first:
//!
//!     1. spans without a style attribute are unwrapped
//!     2. spans below a styled span are unwrapped; the outer style wins
//!     3. what is left becomes `%{style}content%`
//!
//! Whitespace at the edges of a styled span is moved outside the delimiters, so
//! `a<span style="x"> b </span>c` renders as `a %{x}b% c`. A styled span holding nothing
//! but whitespace is left in place as markup.

use crate::dom;
use crate::passes::emphasis::modifier;
use markup5ever_rcdom::Handle;

pub fn resolve_spans(body: &Handle) -> usize {
    unwrap_unstyled(body) + unwrap_nested_styled(body) + apply_styles(body)
}

fn unwrap_unstyled(body: &Handle) -> usize {
    let mut count = 0;
    for span in dom::select_innermost_first(body, &["span"]) {
        if dom::attr(&span, "style").is_none() {
            dom::unwrap(&span);
            count += 1;
        }
    }
    count
}

fn unwrap_nested_styled(body: &Handle) -> usize {
    let mut count = 0;
    for span in dom::select_innermost_first(body, &["span"]) {
        let inside_styled = dom::ancestors(&span).any(|ancestor| {
            dom::is_element(&ancestor, &["span"]) && dom::attr(&ancestor, "style").is_some()
        });
        if inside_styled {
            dom::unwrap(&span);
            count += 1;
        }
    }
    count
}

fn apply_styles(body: &Handle) -> usize {
    let delimiter = modifier("span").unwrap_or("%");
    let mut count = 0;
    for span in dom::select_innermost_first(body, &["span"]) {
        let Some(style) = dom::attr(&span, "style") else {
            dom::unwrap(&span);
            continue;
        };

        // Nothing to style: the span stays as markup.
        if dom::has_only_whitespace(&span) {
            continue;
        }

        let mut content = dom::take_children(&span);
        let leading = dom::strip_leading(&mut content);
        let trailing = dom::strip_trailing(&mut content);

        let mut replacement = Vec::with_capacity(content.len() + 2);
        replacement.push(dom::create_text(&format!("{leading}{delimiter}{{{style}}}")));
        replacement.extend(content);
        replacement.push(dom::create_text(&format!("{delimiter}{trailing}")));
        dom::replace_with(&span, replacement);
        count += 1;
    }
    count
}
