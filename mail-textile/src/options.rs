//! Conversion options

use serde::Deserialize;

/// Which `ul` / `ol` elements the list pass converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListScope {
    /// Convert root lists in document order, stopping at the first nested list the scan
    /// reaches. A nested list is scanned right after its own root, so a root list that
    /// contains nesting is the last one converted and later lists stay as markup.
    #[default]
    UntilNested,
    /// Convert every root list in the document.
    AllRoots,
}

/// Knobs for the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConvertOptions {
    /// Number of consecutive `div` flattening passes.
    pub div_passes: usize,
    pub list_scope: ListScope,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            div_passes: 2,
            list_scope: ListScope::UntilNested,
        }
    }
}

impl ConvertOptions {
    pub fn with_div_passes(mut self, div_passes: usize) -> Self {
        self.div_passes = div_passes;
        self
    }

    pub fn with_list_scope(mut self, list_scope: ListScope) -> Self {
        self.list_scope = list_scope;
        self
    }
}
