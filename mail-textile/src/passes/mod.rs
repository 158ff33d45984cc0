//! The conversion passes
//!
//! Order is important here. Each pass leaves the tree in the shape the next one expects:
//!
//!     1. normalize   source whitespace, parse, drop <title>
//!     2. blocks      div (twice by default) then p, innermost first
//!     3. emphasis    b / strong / i / em / ins / u / del / cite
//!     4. headings    h1 - h3
//!     5. lists       ul / ol, while links, spans and breaks inside items are still elements
//!     6. links       a[href], then br
//!     7. spans       unstyled, then nested, then styled spans
//!     8. entities    newline-space and nbsp fixes, then a fresh parse
//!     9. images      cid: images, only when a content-id map was given
//!
//! Every pass re-selects what it works on from the current tree; node handles from an
//! earlier pass are never reused.

pub mod blocks;
pub mod emphasis;
pub mod entities;
pub mod headings;
pub mod images;
pub mod links;
pub mod lists;
pub mod normalize;
pub mod spans;

use crate::dom;
use markup5ever_rcdom::Handle;

/// Replace `node` with `open`, its trimmed children, then `close`.
pub(crate) fn wrap_trimmed(node: &Handle, open: &str, close: &str) {
    let mut content = dom::take_children(node);
    dom::trim(&mut content);
    let mut replacement = Vec::with_capacity(content.len() + 2);
    if !open.is_empty() {
        replacement.push(dom::create_text(open));
    }
    replacement.extend(content);
    if !close.is_empty() {
        replacement.push(dom::create_text(close));
    }
    dom::replace_with(node, replacement);
}
