use std::collections::{BTreeSet, HashMap};

use super::sort::SortKey;

/// Validated browsing constraints for one catalog request.
///
/// Every field is independently optional; an empty `categories` set places
/// no restriction on category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub categories: BTreeSet<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub min_rating: Option<f64>,
    pub search_text: Option<String>,
    pub sort_key: SortKey,
}

impl FilterSpec {
    /// Builds a filter from raw query parameters.
    ///
    /// Never fails: unparseable numbers are dropped and an unknown sort key
    /// falls back to [`SortKey::Newest`]. NUL characters are stripped from
    /// text values since no stored text can contain them.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let param = |name: &str| params.get(name).map(String::as_str);

        FilterSpec {
            categories: param("category").map(parse_categories).unwrap_or_default(),
            price_min: param("minPrice").and_then(parse_price),
            price_max: param("maxPrice").and_then(parse_price),
            min_rating: param("rating").and_then(parse_rating),
            search_text: param("search")
                .map(strip_nul)
                .filter(|text| !text.is_empty()),
            sort_key: SortKey::parse(param("sort")),
        }
    }
}

fn parse_categories(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|segment| strip_nul(segment).trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}

fn strip_nul(raw: &str) -> String {
    raw.replace('\0', "")
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_price(raw: &str) -> Option<f64> {
    parse_decimal(raw).filter(|value| *value >= 0.0)
}

fn parse_rating(raw: &str) -> Option<f64> {
    parse_decimal(raw)
}
