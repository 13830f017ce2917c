//! Query parameters for the product listing endpoint.

use serde::Deserialize;

/// Absolute upper bound on a requested page size.
pub const MAX_PAGE_SIZE: usize = 50;

const DEFAULT_PAGE_SIZE: usize = 6;

/// Parameters bound from the product listing query string.
///
/// `brands` and `types` arrive comma-separated ("Nike,Adidas"); an empty or
/// missing list means no filtering on that dimension.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpecParams {
    #[serde(default = "default_page_index")]
    page_index: usize,
    #[serde(default = "default_page_size")]
    page_size: usize,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    types: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

fn default_page_index() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductSpecParams {
    fn default() -> Self {
        Self {
            page_index: default_page_index(),
            page_size: default_page_size(),
            brands: None,
            types: None,
            sort: None,
        }
    }
}

impl ProductSpecParams {
    /// One-based page number; anything below one is treated as the first page.
    pub fn page_index(&self) -> usize {
        self.page_index.max(1)
    }

    /// Requested page size, clamped to [`MAX_PAGE_SIZE`].
    pub fn page_size(&self) -> usize {
        self.page_size.min(MAX_PAGE_SIZE)
    }

    pub fn brands(&self) -> Vec<String> {
        split_list(self.brands.as_deref())
    }

    pub fn types(&self) -> Vec<String> {
        split_list(self.types.as_deref())
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Rows to skip for the requested page.
    pub fn skip(&self) -> usize {
        self.page_size() * (self.page_index() - 1)
    }

    /// Rows to take for the requested page.
    pub fn take(&self) -> usize {
        self.page_size()
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn from_query(value: serde_json::Value) -> ProductSpecParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_sent() {
        let params = from_query(json!({}));
        assert_eq!(params.page_index(), 1);
        assert_eq!(params.page_size(), 6);
        assert!(params.brands().is_empty());
        assert!(params.types().is_empty());
        assert_eq!(params.sort(), None);
    }

    #[test]
    fn page_size_is_clamped_to_the_maximum() {
        let params = from_query(json!({ "pageSize": 500 }));
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_index_below_one_is_treated_as_the_first_page() {
        let params = from_query(json!({ "pageIndex": 0 }));
        assert_eq!(params.page_index(), 1);
        assert_eq!(params.skip(), 0);
    }

    #[test]
    fn comma_separated_lists_are_split_and_empties_dropped() {
        let params = from_query(json!({ "brands": "Nike,,Adidas", "types": "Boots" }));
        assert_eq!(params.brands(), vec!["Nike", "Adidas"]);
        assert_eq!(params.types(), vec!["Boots"]);
    }

    #[test]
    fn page_window_math() {
        let params = from_query(json!({ "pageIndex": 3, "pageSize": 6 }));
        assert_eq!(params.skip(), 12);
        assert_eq!(params.take(), 6);
    }
}
