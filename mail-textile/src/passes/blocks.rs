//! Block flattening
//!
//! `div` and `p` elements become their trimmed content followed by a newline. Elements are
//! handled innermost first, so a wrapper sees the already flattened lines of what it wraps.
//! The div pass runs twice by default; with innermost-first ordering the second round only
//! has work to do when a previous pass left divs behind.

use crate::dom;
use markup5ever_rcdom::Handle;

/// Flatten every `tag` element once. Returns the number of elements flattened.
pub fn flatten(body: &Handle, tag: &str) -> usize {
    let blocks = dom::select_innermost_first(body, &[tag]);
    for block in &blocks {
        dom::clear_attrs(block);
        super::wrap_trimmed(block, "", "\n");
    }
    blocks.len()
}

/// Run `div_passes` div passes followed by one p pass.
pub fn flatten_blocks(body: &Handle, div_passes: usize) -> usize {
    let divs: usize = (0..div_passes).map(|_| flatten(body, "div")).sum();
    divs + flatten(body, "p")
}
