//! Styled and unstyled spans

use super::to_textile;

#[test]
fn test_span_with_style() {
    assert_eq!(
        to_textile("<p>I'm <span style=\"color:red;\">unaware</span> of most soft drinks.</p>"),
        "I'm %{color:red;}unaware% of most soft drinks.\n"
    );
}

#[test]
fn test_span_style_inside_bold() {
    assert_eq!(
        to_textile(
            "<b>This is bold <span style=\"color: indianred\">but this is red and bold!</span>    </b>"
        ),
        "*This is bold %{color: indianred}but this is red and bold!%*"
    );
}

#[test]
fn test_span_with_new_lines() {
    assert_eq!(
        to_textile("<span style=\"font-weight: bold;\">Testing some bold<br><br></span>"),
        "%{font-weight: bold;}Testing some bold%\n\n"
    );
}

// Newlines in the source turn into spaces, so "un a ware" ends up with one space
// on each side that sits outside the style delimiters.
#[test]
fn test_span_whitespaces() {
    let html = "<p>I'm <span
        style=\"color:red;\">
    un a
    ware
</span>
    of most soft drinks.</p>";
    assert_eq!(
        to_textile(html),
        "I'm  %{color:red;}un a ware%  of most soft drinks.\n"
    );
}

#[test]
fn test_span_with_style_and_spaces() {
    assert_eq!(
        to_textile("Standard<span style=\"font-style: italic;\">italics </span>and"),
        "Standard%{font-style: italic;}italics% and"
    );
    assert_eq!(
        to_textile("Standard<span style=\"font-style: italic;\"> italics</span> and"),
        "Standard %{font-style: italic;}italics% and"
    );
    assert_eq!(
        to_textile("Standard <span style=\"font-style: italic;\">italics</span> and"),
        "Standard %{font-style: italic;}italics% and"
    );
    assert_eq!(
        to_textile("Standard<span style=\"font-style: italic;\"> italics </span>and"),
        "Standard %{font-style: italic;}italics% and"
    );
}

#[test]
fn test_clean_span_without_style() {
    assert_eq!(
        to_textile(
            "<span>test<br><br><span style=\"font-weight: bold;\">Testing some bold<br><br></span></span>test"
        ),
        "test\n\n%{font-weight: bold;}Testing some bold%\n\ntest"
    );
}

#[test]
fn test_clean_nested_span_if_parent_span_has_style() {
    assert_eq!(
        to_textile(
            "This is <span style=\"font-style: italic;\">a nested <span style=\"font-weight: bold;\">span test</span></span>"
        ),
        "This is %{font-style: italic;}a nested span test%"
    );
}

#[test]
fn test_clean_non_styled_parent_span_if_child_span_has_style() {
    assert_eq!(
        to_textile(
            "This is <span>a nested <span style=\"font-weight: bold;\">span test</span></span>"
        ),
        "This is a nested %{font-weight: bold;}span test%"
    );
}

#[test]
fn test_clean_all_spans_if_none_have_styles() {
    assert_eq!(
        to_textile("This is <span>a nested <span>span test</span></span>"),
        "This is a nested span test"
    );
}

#[test]
fn test_new_line_at_span_start() {
    assert_eq!(to_textile("<span>\ntest</span>"), " test");
}

#[test]
fn test_blank_styled_span_is_kept_as_markup() {
    assert_eq!(
        to_textile("a<span style=\"x\"> </span>b"),
        "a<span style=\"x\"> </span>b"
    );
    assert_eq!(
        to_textile("a<span style=\"x\"></span>b"),
        "a<span style=\"x\"></span>b"
    );
}
