use tracing::debug;

use super::filter::FilterSpec;
use super::predicate::Predicate;
use super::sort::Ordering;
use crate::error::CatalogError;
use crate::models::Product;
use crate::store::ProductStore;

/// A compiled catalog request: which products to select and how to order them.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub predicate: Predicate,
    pub ordering: Ordering,
}

pub fn compile_catalog_query(spec: &FilterSpec) -> CatalogQuery {
    CatalogQuery {
        predicate: Predicate::from(spec),
        ordering: Ordering::from(spec.sort_key),
    }
}

/// Runs one catalog read against `store` and returns the ordered result.
pub fn execute(store: &dyn ProductStore, spec: &FilterSpec) -> Result<Vec<Product>, CatalogError> {
    let query = compile_catalog_query(spec);
    let mut products = store.find_matching(&query)?;
    // Backends may break ties differently; the final order is always ours.
    query.ordering.sort(&mut products);
    debug!(
        count = products.len(),
        sort = spec.sort_key.as_str(),
        "catalog query served"
    );
    Ok(products)
}

pub fn find_product(store: &dyn ProductStore, id: i32) -> Result<Option<Product>, CatalogError> {
    Ok(store.find_by_id(id)?)
}
