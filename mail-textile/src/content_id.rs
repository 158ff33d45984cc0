//! Content-id map for inline images
//!
//! Inline images in an HTML email point at attachments through `cid:` URLs. The mail layer
//! works out which stored attachment each content id belongs to and hands the converter a
//! map keyed by the angle-bracket form of the id, as found in the `Content-ID` header:
//!
//!     { "<ii_1477855169c39137>": "image1.png" }
//!
//! The map is read-only for the converter.

use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::BTreeMap;

static CID_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"cid:([^\s"'<>()!]+)"#).expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ContentIdMap {
    entries: BTreeMap<String, String>,
}

impl ContentIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON object the mail layer posts alongside the message.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, content_id: impl Into<String>, file_name: impl Into<String>) {
        self.entries.insert(content_id.into(), file_name.into());
    }

    /// File name stored under the angle-bracket form of a content id, e.g. `<ii_1>`.
    pub fn get(&self, content_id: &str) -> Option<&str> {
        self.entries.get(content_id).map(String::as_str)
    }

    /// File name for an `img` source. A leading `cid:` is dropped before the lookup.
    pub fn file_name_for_src(&self, src: &str) -> Option<&str> {
        let content_id = src.strip_prefix("cid:").unwrap_or(src);
        self.get(&format!("<{content_id}>"))
    }

    /// Replace `cid:<id>` references in already rendered text with the mapped file names.
    /// References to unknown ids are left as they are.
    pub fn rewrite_cid_references(&self, text: &str) -> String {
        CID_REFERENCE
            .replace_all(text, |caps: &Captures| {
                self.get(&format!("<{}>", &caps[1]))
                    .map(str::to_owned)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(content_id, file_name)| (content_id.as_str(), file_name.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ContentIdMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (content_id, file_name) in iter {
            map.insert(content_id, file_name);
        }
        map
    }
}
