//! HTML email bodies to Textile
//!
//!     This crate turns the HTML part of an inbound email into the Textile dialect used for
//!     issue descriptions and comments. The mail plumbing around it (recipient checks, reply
//!     routing, attachment storage) lives elsewhere and only hands us a raw HTML string plus,
//!     optionally, the map of inline-image content ids to stored attachment names.
//!
//!     TLDR:
//!         - The input is never rejected. Whatever an email client produced gets parsed by
//!           html5ever, which repairs it the way a browser would.
//!         - Conversion is a fixed sequence of tree rewrites over one DOM (./passes/mod.rs).
//!           Each pass re-queries the tree, as earlier passes dissolve elements.
//!         - Output is lossy and one directional. Feeding Textile back in is not supported.
//!
//! Architecture
//!
//!     The converter is a pipeline of passes, each one a plain function over the document
//!     body. Passes rewrite an element by splicing its own children into the parent, framed by
//!     text nodes holding the Textile delimiters, so markup still inside (a span in a list
//!     item, a link in a heading) stays structured for the passes that come after.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── options.rs              # ConvertOptions, ListScope
//!     ├── content_id.rs           # ContentIdMap (inline image lookup)
//!     ├── converter.rs            # Converter, the ordered pipeline
//!     ├── dom.rs                  # rcdom helpers: select, splice, trim, serialize
//!     ├── body.rs                 # text/plain body cleanup
//!     ├── passes
//!     │   ├── normalize.rs        # source whitespace, parse, <title> removal
//!     │   ├── blocks.rs           # div / p flattening
//!     │   ├── emphasis.rs         # b, i, em, strong, ins, u, del, cite
//!     │   ├── headings.rs         # h1 - h3
//!     │   ├── lists.rs            # ul / ol
//!     │   ├── links.rs            # a, br
//!     │   ├── spans.rs            # styled span reduction
//!     │   ├── entities.rs         # whitespace / nbsp fixes and re-parse
//!     │   └── images.rs           # cid: images
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     └── textile
//!         ├── <area>.rs
//!         └── mod.rs
//!
//!     Each pass also carries unit tests for its own edge cases.
//!
//! Known Limitations
//!
//!     Elements no pass knows about (hr, table, font...) are emitted as literal markup. Styling
//!     is only honoured on whole elements, never on parts of a word. Lists stop being converted
//!     once the scan reaches a nested list (see [`ListScope`]).

pub mod body;
pub mod content_id;
pub mod converter;
pub mod dom;
pub mod error;
pub mod options;
pub mod passes;

pub use content_id::ContentIdMap;
pub use converter::Converter;
pub use error::ConvertError;
pub use options::{ConvertOptions, ListScope};

/// Converts an HTML email body to Textile with the default options.
pub fn html_to_textile(
    html: &str,
    content_ids: Option<&ContentIdMap>,
) -> Result<String, ConvertError> {
    Converter::new(html, content_ids.cloned()).to_textile()
}
