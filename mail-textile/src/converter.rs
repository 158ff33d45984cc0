//! The conversion pipeline

use crate::content_id::ContentIdMap;
use crate::dom;
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::passes::{blocks, emphasis, entities, headings, images, links, lists, normalize, spans};
use tracing::{debug, trace};

/// Converts one HTML email body to Textile.
///
/// The converter is consumed by [`Converter::to_textile`]; every conversion builds and owns
/// its own DOM, so separate converters share nothing.
#[derive(Debug, Clone)]
pub struct Converter {
    html: String,
    content_ids: Option<ContentIdMap>,
    options: ConvertOptions,
}

impl Converter {
    /// Without a content-id map, images are left as markup.
    pub fn new(html: &str, content_ids: Option<ContentIdMap>) -> Self {
        Self::with_options(html, content_ids, ConvertOptions::default())
    }

    pub fn with_options(
        html: &str,
        content_ids: Option<ContentIdMap>,
        options: ConvertOptions,
    ) -> Self {
        Self {
            html: html.to_string(),
            content_ids,
            options,
        }
    }

    /// Run every pass and return the Textile text.
    ///
    /// Malformed markup never produces an error. `Err` only comes out of the HTML serializer.
    pub fn to_textile(self) -> Result<String, ConvertError> {
        trace!(bytes = self.html.len(), "converting html body");

        let document = normalize::create_document(&self.html);
        let body = dom::body(&document);

        run_pass("blocks", || {
            blocks::flatten_blocks(&body, self.options.div_passes)
        });
        run_pass("emphasis", || emphasis::rewrite_emphasis(&body));
        run_pass("headings", || headings::rewrite_headings(&body));
        run_pass("lists", || lists::rewrite_lists(&body, self.options.list_scope));
        run_pass("anchors", || links::rewrite_anchors(&body));
        run_pass("breaks", || links::rewrite_breaks(&body));
        run_pass("spans", || spans::resolve_spans(&body));

        let document = entities::reparse_normalized(&body)?;
        let body = dom::body(&document);

        if let Some(content_ids) = &self.content_ids {
            run_pass("images", || images::substitute_images(&body, content_ids));
        }

        Ok(dom::serialize_children(&body)?)
    }
}

fn run_pass(name: &str, pass: impl FnOnce() -> usize) {
    let rewritten = pass();
    debug!(pass = name, rewritten, "pass complete");
}
