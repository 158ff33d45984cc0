//! Bulleted and numbered lists

use super::{to_textile, to_textile_with_options};
use mail_textile::{ConvertOptions, ListScope};

#[test]
fn test_simple_bulleted_list() {
    assert_eq!(
        to_textile("<ul><li>A first item</li><li>A third</li></ul>"),
        "\n\n* A first item\n* A third\n\n"
    );
}

#[test]
fn test_simple_bulleted_list_with_space() {
    assert_eq!(
        to_textile("<ul><li>A f\n\n\n    irst item</li><li>A\n\n    third</li></ul>\n"),
        "\n\n* A f irst item\n* A third\n\n"
    );
}

#[test]
fn test_simple_numeric_list() {
    assert_eq!(
        to_textile("<ol><li>A first item</li><li>A third</li></ol>"),
        "\n\n# A first item\n# A third\n\n"
    );
}

#[test]
fn test_simple_numeric_list_with_style() {
    assert_eq!(
        to_textile(
            "<ol><li>A first <span style=\"color:red\">item</span></li><li>A third</li></ol>"
        ),
        "\n\n# A first %{color:red}item%\n# A third\n\n"
    );
}

#[test]
fn test_bulleted_nested_list() {
    let html = "
<ul><li>Fuel could be:
<ul>
<li>Coal
</li>
<li>Electricity</li>
</ul>
</li>
<li>Humans need only:
<ul>
<li>Water</li>
<li>Protein</li>
</ul></li>
</ul>
";
    assert_eq!(
        to_textile(html),
        "\n\n* Fuel could be:\n** Coal\n** Electricity\n* Humans need only:\n** Water\n** Protein\n\n"
    );
}

#[test]
fn test_numeric_nested_list() {
    let html = "
<ol>
<li>Fuel could be:
<ol>
<li>Coal</li>
<li>Electricity</li>
</ol>
</li>
<li>Humans need only:
<ol>
<li>Water</li>
<li>Protein</li>
</ol></li>
</ol>";
    assert_eq!(
        to_textile(html),
        "\n\n# Fuel could be:\n## Coal\n## Electricity\n# Humans need only:\n## Water\n## Protein\n\n"
    );
}

#[test]
fn test_mixed_nesting_uses_ordered_depth() {
    assert_eq!(
        to_textile("<ol><li>step<ul><li>detail</li></ul></li></ol>"),
        "\n\n# step\n# detail\n\n"
    );
}

#[test]
fn test_new_lists_must_be_preceded_by_a_blank_line() {
    assert_eq!(
        to_textile("<ul><li>item1</li></ul><ol><li>item1</li></ol>"),
        "\n\n* item1\n\n\n\n# item1\n\n"
    );
}

#[test]
fn test_second_root_list_after_nested_list_stays_markup() {
    assert_eq!(
        to_textile("<ul><li>a<ul><li>b</li></ul></li></ul><ul><li>c</li></ul>"),
        "\n\n* a\n** b\n\n<ul><li>c</li></ul>"
    );
}

#[test]
fn test_all_roots_scope_converts_every_list() {
    let options = ConvertOptions::default().with_list_scope(ListScope::AllRoots);
    assert_eq!(
        to_textile_with_options(
            "<ul><li>a<ul><li>b</li></ul></li></ul><ul><li>c</li></ul>",
            options
        ),
        "\n\n* a\n** b\n\n\n\n* c\n\n"
    );
}

#[test]
fn test_list_items_keep_inline_markup() {
    assert_eq!(
        to_textile("<ul><li><a href=\"http://x.org\">x</a> and <b>y</b></li></ul>"),
        "\n\n* \"x\":http://x.org and *y*\n\n"
    );
}

#[test]
fn test_break_inside_item() {
    assert_eq!(to_textile("<ul><li>a<br>b</li></ul>"), "\n\n* a\nb\n\n");
}
