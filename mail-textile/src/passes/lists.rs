//! Lists
//!
//! A root list (a `ul` / `ol` with no list ancestor) is replaced by one line per `li` at any
//! depth, in document order, framed by blank lines:
//!
//!     <ul><li>Fuel:<ul><li>Coal</li></ul></li></ul>   →   "\n\n* Fuel:\n** Coal\n\n"
//!
//! The indicator repeats `#` once per `ol` ancestor of the item. Items without an `ol`
//! ancestor repeat `*` once per `ul` ancestor instead. Mixed nesting therefore only counts
//! the ordered levels: an item under `ol > li > ul` gets a single `#`.
//!
//! Item content keeps its inline elements (links, spans, breaks) for the passes that run
//! later. Nested lists are cut out of their parent item, their items already have lines of
//! their own.

use crate::dom;
use crate::options::ListScope;
use markup5ever_rcdom::Handle;

const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Returns the number of root lists converted.
pub fn rewrite_lists(body: &Handle, scope: ListScope) -> usize {
    let lists = dom::select(body, LIST_TAGS);
    // Decided up front: converting one root list must not change how later ones are seen.
    let nested: Vec<bool> = lists.iter().map(has_list_ancestor).collect();

    let mut converted = 0;
    for (list, is_nested) in lists.iter().zip(nested) {
        if is_nested {
            match scope {
                ListScope::UntilNested => break,
                ListScope::AllRoots => continue,
            }
        }
        convert_root_list(list);
        converted += 1;
    }
    converted
}

fn has_list_ancestor(node: &Handle) -> bool {
    dom::ancestors(node).any(|ancestor| dom::is_element(&ancestor, LIST_TAGS))
}

fn indicator(item: &Handle) -> String {
    let (mut ordered, mut unordered) = (0, 0);
    for ancestor in dom::ancestors(item) {
        match dom::tag_name(&ancestor) {
            Some("ol") => ordered += 1,
            Some("ul") => unordered += 1,
            _ => {}
        }
    }
    if ordered > 0 {
        "#".repeat(ordered)
    } else {
        "*".repeat(unordered)
    }
}

fn convert_root_list(list: &Handle) {
    let items: Vec<(String, Handle)> = dom::select(list, &["li"])
        .into_iter()
        .map(|item| (indicator(&item), item))
        .collect();

    // Take every item's content before any nested list is cut loose: a dropped rcdom node
    // empties all of its descendants.
    let lines: Vec<(String, Vec<Handle>)> = items
        .iter()
        .map(|(indicator, item)| (indicator.clone(), dom::take_children(item)))
        .collect();

    let mut replacement = vec![dom::create_text("\n\n")];
    for (index, (indicator, mut content)) in lines.into_iter().enumerate() {
        content.retain(|node| !dom::is_element(node, LIST_TAGS));
        for node in &content {
            for nested in dom::select(node, LIST_TAGS) {
                dom::detach(&nested);
            }
        }
        dom::trim(&mut content);

        if index > 0 {
            replacement.push(dom::create_text("\n"));
        }
        if content.is_empty() {
            replacement.push(dom::create_text(&indicator));
        } else {
            replacement.push(dom::create_text(&format!("{indicator} ")));
            replacement.extend(content);
        }
    }
    replacement.push(dom::create_text("\n\n"));

    dom::replace_with(list, replacement);
}
