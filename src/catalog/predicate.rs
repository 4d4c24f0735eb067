use std::collections::BTreeSet;

use super::filter::FilterSpec;
use crate::models::Product;

/// Store-neutral boolean expression over a [`Product`].
///
/// Evaluated directly by in-memory stores and translated into SQL by the
/// diesel adapter in `db::repository`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Always,
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    CategoryIn(BTreeSet<String>),
    PriceAtLeast(f64),
    PriceAtMost(f64),
    RatingAtLeast(f64),
    /// Case-insensitive substring match on the name.
    NameContains(String),
    /// Case-insensitive substring match on the description.
    DescriptionContains(String),
}

impl Predicate {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::All(clauses) => clauses.iter().all(|clause| clause.matches(product)),
            Predicate::Any(clauses) => clauses.iter().any(|clause| clause.matches(product)),
            Predicate::CategoryIn(labels) => labels.contains(product.category.label()),
            Predicate::PriceAtLeast(min) => product.price >= *min,
            Predicate::PriceAtMost(max) => product.price <= *max,
            Predicate::RatingAtLeast(min) => product.eco_rating >= *min,
            Predicate::NameContains(needle) => contains_ignore_case(&product.name, needle),
            Predicate::DescriptionContains(needle) => {
                contains_ignore_case(&product.description, needle)
            }
        }
    }

    fn all(mut clauses: Vec<Predicate>) -> Predicate {
        match clauses.len() {
            0 => Predicate::Always,
            1 => clauses.remove(0),
            _ => Predicate::All(clauses),
        }
    }
}

impl From<&FilterSpec> for Predicate {
    fn from(spec: &FilterSpec) -> Self {
        let mut clauses = Vec::new();

        if !spec.categories.is_empty() {
            clauses.push(Predicate::CategoryIn(spec.categories.clone()));
        }
        if let Some(min) = spec.price_min {
            clauses.push(Predicate::PriceAtLeast(min));
        }
        if let Some(max) = spec.price_max {
            clauses.push(Predicate::PriceAtMost(max));
        }
        if let Some(min) = spec.min_rating {
            clauses.push(Predicate::RatingAtLeast(min));
        }
        if let Some(text) = &spec.search_text {
            clauses.push(Predicate::Any(vec![
                Predicate::NameContains(text.clone()),
                Predicate::DescriptionContains(text.clone()),
            ]));
        }

        Predicate::all(clauses)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// Per-character simple case folding. Unlike `str::to_lowercase` it ignores
/// word position, so a capital sigma always folds to `σ`.
fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}
