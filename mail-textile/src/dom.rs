//! rcdom helpers shared by the conversion passes
//!
//! Passes never re-parse markup to rewrite an element. Instead [`replace_with`] splices a
//! sequence of nodes (usually the element's own children, framed by new text nodes) into the
//! parent at the element's position. Node identity is kept, so elements that are still inside
//! the moved content stay reachable for the passes that run afterwards.

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

/// Parse a complete HTML document. Never fails: html5ever repairs whatever it is given.
pub fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// The `<body>` element of a parsed document, or the document node if there is none.
pub fn body(dom: &RcDom) -> Handle {
    select(&dom.document, &["body"])
        .into_iter()
        .next()
        .unwrap_or_else(|| dom.document.clone())
}

/// Local name of an element node.
pub fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn is_element(node: &Handle, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|name| tags.contains(&name))
}

/// Attribute value by name.
pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

pub fn clear_attrs(node: &Handle) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().clear();
    }
}

/// All elements below `root` whose tag is one of `tags`, in document order.
pub fn select(root: &Handle, tags: &[&str]) -> Vec<Handle> {
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();
    while let Some(node) = stack.pop() {
        if is_element(&node, tags) {
            found.push(node.clone());
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    found
}

/// Like [`select`], but ordered by ascending descendant count so that inner elements come
/// before the elements that wrap them. Ties keep document order.
pub fn select_innermost_first(root: &Handle, tags: &[&str]) -> Vec<Handle> {
    let mut found = select(root, tags);
    found.sort_by_cached_key(descendant_count);
    found
}

pub fn descendant_count(node: &Handle) -> usize {
    let mut count = 0;
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        let children = current.children.borrow();
        count += children.len();
        stack.extend(children.iter().cloned());
    }
    count
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|weak| weak.upgrade());
    node.parent.set(weak);
    parent
}

/// Ancestors of `node`, nearest first.
pub fn ancestors(node: &Handle) -> impl Iterator<Item = Handle> {
    std::iter::successors(parent(node), parent)
}

/// Detach and return the children of `node`.
pub fn take_children(node: &Handle) -> Vec<Handle> {
    std::mem::take(&mut *node.children.borrow_mut())
}

/// Put `replacement` where `node` sits in its parent. Detached nodes are left alone.
pub fn replace_with(node: &Handle, replacement: Vec<Handle>) {
    let Some(parent) = parent(node) else {
        return;
    };
    let mut siblings = parent.children.borrow_mut();
    let Some(index) = siblings.iter().position(|sibling| Rc::ptr_eq(sibling, node)) else {
        return;
    };
    for new_child in &replacement {
        new_child.parent.set(Some(Rc::downgrade(&parent)));
    }
    siblings.splice(index..=index, replacement);
    node.parent.set(None);
}

/// Replace an element by its own children, untouched.
pub fn unwrap(node: &Handle) {
    let children = take_children(node);
    replace_with(node, children);
}

/// Remove `node` from its parent.
pub fn detach(node: &Handle) {
    replace_with(node, Vec::new());
}

pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Whitespace as markup sees it. Non-breaking spaces are content, not whitespace.
pub fn is_markup_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// True when every child is a text node made of markup whitespace (or there are none).
pub fn has_only_whitespace(node: &Handle) -> bool {
    node.children.borrow().iter().all(|child| match &child.data {
        NodeData::Text { contents } => contents.borrow().chars().all(is_markup_space),
        _ => false,
    })
}

/// Strip leading whitespace off a node sequence and return what was removed.
///
/// Whitespace is taken from leading text nodes only; the first element or non-space
/// character stops it. Text nodes left empty are dropped from `nodes`.
pub fn strip_leading(nodes: &mut Vec<Handle>) -> String {
    let mut stripped = String::new();
    while let Some(first) = nodes.first().cloned() {
        let NodeData::Text { contents } = &first.data else {
            break;
        };
        let text = contents.borrow().to_string();
        let kept = text.trim_start_matches(is_markup_space);
        stripped.push_str(&text[..text.len() - kept.len()]);
        if !kept.is_empty() {
            *contents.borrow_mut() = StrTendril::from_slice(kept);
            break;
        }
        nodes.remove(0);
    }
    stripped
}

/// Mirror of [`strip_leading`] for the end of the sequence.
pub fn strip_trailing(nodes: &mut Vec<Handle>) -> String {
    let mut stripped = String::new();
    while let Some(last) = nodes.last().cloned() {
        let NodeData::Text { contents } = &last.data else {
            break;
        };
        let text = contents.borrow().to_string();
        let kept = text.trim_end_matches(is_markup_space);
        stripped.insert_str(0, &text[kept.len()..]);
        if !kept.is_empty() {
            *contents.borrow_mut() = StrTendril::from_slice(kept);
            break;
        }
        nodes.pop();
    }
    stripped
}

pub fn trim(nodes: &mut Vec<Handle>) {
    strip_leading(nodes);
    strip_trailing(nodes);
}

/// Serialize the children of `node` as HTML.
pub fn serialize_children(node: &Handle) -> io::Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut output, &SerializableHandle::from(node.clone()), opts)?;
    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
