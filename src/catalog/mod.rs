//! Product query compiler: raw browsing parameters in, ordered products out.
//!
//! `filter` parses request parameters into a [`FilterSpec`], `predicate` and
//! `sort` turn it into a store-neutral [`CatalogQuery`], and `executor` runs
//! that query against a [`ProductStore`](crate::store::ProductStore).

pub mod executor;
pub mod filter;
pub mod predicate;
pub mod sort;

pub use executor::{compile_catalog_query, execute, find_product, CatalogQuery};
pub use filter::FilterSpec;
pub use predicate::Predicate;
pub use sort::{Direction, Ordering, SortField, SortKey};
