//! Inline images resolved through the content-id map

use super::{to_textile, to_textile_with_map};
use mail_textile::ContentIdMap;

fn map(content_id: &str, file_name: &str) -> ContentIdMap {
    [(content_id, file_name)].into_iter().collect()
}

#[test]
fn test_image() {
    assert_eq!(
        to_textile_with_map(
            "<img src=\"cid:ii_1477855169c39137\" />",
            map("<ii_1477855169c39137>", "image1.png")
        ),
        "!image1.png!"
    );
}

#[test]
fn test_image_missing_from_map() {
    assert_eq!(
        to_textile_with_map("<img src=\"cid:ii_2\">", map("<ii_1>", "image1.png")),
        "!!"
    );
}

#[test]
fn test_image_without_map_stays_markup() {
    assert_eq!(to_textile("<img src=\"cid:ii_1\">"), "<img src=\"cid:ii_1\">");
}

// Gmail wraps inline images in up to four levels of divs, and every level is flattened.
// Leading and trailing blank lines depend on how wrapper whitespace is counted, so besides
// the exact output each test checks the lines between them against a second rendering.
fn assert_same_lines(actual: &str, reference: &str) {
    assert_eq!(actual.trim_matches('\n'), reference.trim_matches('\n'));
}

#[test]
fn test_gmail_div_plus_image() {
    let html = "<div dir=\"ltr\"><div class=\"gmail_default\" style=\"font-family:arial,helvetica,sans-serif\"><br></div><div class=\"gmail_quote\"><br><div dir=\"ltr\"><div style=\"font-family:arial,helvetica,sans-serif\">plain text</div><div style=\"font-family:arial,helvetica,sans-serif\"> <img src=\"cid:ii_1477f9531e1536e7\" alt=\"Inline image 1\" width=\"454\" height=\"250\"><br> </div></div> </div><br></div>";
    let textile = to_textile_with_map(html, map("<ii_1477f9531e1536e7>", "image1.png"));
    assert_eq!(textile, "\n\n\nplain text\n!image1.png!\n\n\n\n");
    assert_same_lines(&textile, "\nplain text\n!image1.png!\n\n\n");
}

#[test]
fn test_clean_div_plus_image() {
    let html = "<div><div><br></div><div><br><div><div>plain text</div><div><img src=\"cid:ii_1477f9531e1536e7\"><br> </div></div> </div><br></div>";
    let textile = to_textile_with_map(html, map("<ii_1477f9531e1536e7>", "image1.png"));
    assert_eq!(textile, "\n\n\nplain text\n!image1.png!\n\n\n\n");
    assert_same_lines(&textile, "\n\nplain text\n!image1.png!");
    assert!(!textile.contains("<div"));
}

#[test]
fn test_map_from_json() {
    let content_ids =
        ContentIdMap::from_json(r#"{"<ii_1>": "chart.png"}"#).expect("valid content-id map");
    assert_eq!(
        to_textile_with_map("<p>Chart: <img src=\"cid:ii_1\"></p>", content_ids),
        "Chart: !chart.png!\n"
    );
}

#[test]
fn test_image_inside_paragraph() {
    assert_eq!(
        to_textile_with_map("<p>See <img src=\"cid:ii_1\"></p>", map("<ii_1>", "image1.png")),
        "See !image1.png!\n"
    );
}

#[test]
fn test_html_to_textile_borrows_the_map() {
    let content_ids = map("<ii_1>", "image1.png");
    let textile = mail_textile::html_to_textile("<b>bold</b> <img src=\"cid:ii_1\">", Some(&content_ids))
        .expect("conversion should succeed");
    assert_eq!(textile, "*bold* !image1.png!");
    assert_eq!(
        mail_textile::html_to_textile("<b>bold</b>", None).expect("conversion should succeed"),
        "*bold*"
    );
    assert_eq!(content_ids.len(), 1);
}
