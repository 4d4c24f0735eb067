use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::catalog::CatalogQuery;
use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductUpdate};

/// Persistence collaborator for products.
///
/// Implementations are blocking; HTTP handlers call them through
/// `actix_web::web::block`.
pub trait ProductStore: Send + Sync {
    /// Every product matching `query.predicate`. Ordering is advisory.
    fn find_matching(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError>;

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError>;

    fn insert(&self, new_product: NewProduct) -> Result<Product, StoreError>;

    /// `Ok(None)` when no product has `id`.
    fn update(&self, id: i32, changes: ProductUpdate) -> Result<Option<Product>, StoreError>;

    /// `Ok(false)` when no product has `id`.
    fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

#[derive(Debug)]
struct Catalog {
    products: BTreeMap<i32, Product>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            products: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

/// Process-local store used for tests and the `memory` storage backend.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Catalog>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads products verbatim, keeping their ids and timestamps.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<i32, Product> = products.into_iter().map(|p| (p.id, p)).collect();
        let next_id = match products.keys().next_back() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        InMemoryProductStore {
            inner: RwLock::new(Catalog { products, next_id }),
        }
    }
}

impl ProductStore for InMemoryProductStore {
    fn find_matching(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError> {
        let catalog = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(catalog
            .products
            .values()
            .filter(|product| query.predicate.matches(product))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let catalog = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(catalog.products.get(&id).cloned())
    }

    fn insert(&self, new_product: NewProduct) -> Result<Product, StoreError> {
        let mut catalog = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = catalog.next_id.ok_or(StoreError::IdsExhausted)?;
        catalog.next_id = id.checked_add(1);

        let product = Product {
            id,
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            category: new_product.category,
            images: new_product.images,
            eco_rating: new_product.eco_rating,
            materials: new_product.materials,
            features: new_product.features,
            certifications: new_product.certifications,
            stock: new_product.stock,
            is_featured: new_product.is_featured,
            created_at: Utc::now(),
        };
        catalog.products.insert(id, product.clone());
        Ok(product)
    }

    fn update(&self, id: i32, changes: ProductUpdate) -> Result<Option<Product>, StoreError> {
        let mut catalog = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(catalog.products.get_mut(&id).map(|product| {
            changes.apply_to(product);
            product.clone()
        }))
    }

    fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut catalog = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(catalog.products.remove(&id).is_some())
    }
}
