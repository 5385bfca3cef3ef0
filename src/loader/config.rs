//! Loader configuration
//!
//! Passed in from JavaScript as a plain object; every field has a default so
//! an empty object (or no object at all) targets the local generation service.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";
pub const DEFAULT_CATEGORY: &str = "javascript";

/// Where and how to fetch the puzzle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderConfig {
    /// Generation endpoint without query string
    pub endpoint: String,

    /// Word category passed as the `category` query parameter
    pub category: String,

    /// Swap x and y of every coordinate in the payload.
    ///
    /// Set this for services that index their grid as `[row][column]` and
    /// call the row `x` (the bundled Go generator does).
    #[serde(alias = "transpose_axes")]
    pub transpose_axes: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            transpose_axes: false,
        }
    }
}

impl LoaderConfig {
    /// Full request URL given an already URI-encoded category
    pub fn request_url(&self, encoded_category: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}category={}", self.endpoint, separator, encoded_category)
    }
}
