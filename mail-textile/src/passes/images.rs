//! Inline images
//!
//! `<img src="cid:ii_1">` becomes `!file.png!` using the content-id map. An id missing from
//! the map yields `!!`; the caller gets no signal for it.

use crate::content_id::ContentIdMap;
use crate::dom;
use markup5ever_rcdom::Handle;

pub fn substitute_images(body: &Handle, content_ids: &ContentIdMap) -> usize {
    let images = dom::select(body, &["img"]);
    for image in &images {
        let src = dom::attr(image, "src").unwrap_or_default();
        let name = content_ids.file_name_for_src(&src).unwrap_or_default();
        dom::replace_with(image, vec![dom::create_text(&format!("!{name}!"))]);
    }
    images.len()
}
