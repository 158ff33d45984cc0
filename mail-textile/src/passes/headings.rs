//! Headings. Only h1 - h3 are converted; h4 - h6 pass through as markup.

use crate::dom;
use markup5ever_rcdom::Handle;

pub fn rewrite_headings(body: &Handle) -> usize {
    let headings = dom::select(body, &["h1", "h2", "h3"]);
    for heading in &headings {
        let Some(tag) = dom::tag_name(heading).map(str::to_owned) else {
            continue;
        };
        super::wrap_trimmed(heading, &format!("\n\n{tag}. "), "\n\n");
    }
    headings.len()
}
