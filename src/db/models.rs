use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db::schema::products;
use crate::error::StoreError;
use crate::models::{Category, NewProduct, Product, ProductUpdate};

#[derive(Queryable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub images: Vec<String>,
    pub eco_rating: f64,
    pub materials: Vec<String>,
    pub features: Vec<String>,
    pub certifications: Vec<String>,
    pub stock: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse::<Category>()
            .map_err(|err| StoreError::Malformed {
                id: row.id,
                reason: err.to_string(),
            })?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category,
            images: row.images,
            eco_rating: row.eco_rating,
            materials: row.materials,
            features: row.features,
            certifications: row.certifications,
            stock: row.stock,
            is_featured: row.is_featured,
            created_at: row.created_at,
        })
    }
}

/// Insert payload; `id` and `created_at` come from column defaults.
#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub images: Vec<String>,
    pub eco_rating: f64,
    pub materials: Vec<String>,
    pub features: Vec<String>,
    pub certifications: Vec<String>,
    pub stock: i32,
    pub is_featured: bool,
}

impl From<NewProduct> for NewProductRow {
    fn from(product: NewProduct) -> Self {
        NewProductRow {
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category.label().to_string(),
            images: product.images,
            eco_rating: product.eco_rating,
            materials: product.materials,
            features: product.features,
            certifications: product.certifications,
            stock: product.stock,
            is_featured: product.is_featured,
        }
    }
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub eco_rating: Option<f64>,
    pub materials: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub stock: Option<i32>,
    pub is_featured: Option<bool>,
}

impl From<ProductUpdate> for ProductChangeset {
    fn from(update: ProductUpdate) -> Self {
        ProductChangeset {
            name: update.name,
            description: update.description,
            price: update.price,
            category: update.category.map(|category| category.label().to_string()),
            images: update.images,
            eco_rating: update.eco_rating,
            materials: update.materials,
            features: update.features,
            certifications: update.certifications,
            stock: update.stock,
            is_featured: update.is_featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str) -> ProductRow {
        ProductRow {
            id: 9,
            name: "Cork Yoga Mat".to_string(),
            description: "Non-slip".to_string(),
            price: 45.0,
            category: category.to_string(),
            images: vec!["mat.jpg".to_string()],
            eco_rating: 5.0,
            materials: vec![],
            features: vec![],
            certifications: vec![],
            stock: 25,
            is_featured: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn rows_with_known_labels_convert() {
        let product = Product::try_from(row("Eco Lifestyle")).unwrap();
        assert_eq!(product.category, Category::EcoLifestyle);
        assert_eq!(product.id, 9);
    }

    #[test]
    fn rows_with_unknown_labels_are_malformed() {
        let err = Product::try_from(row("Gadgets")).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { id: 9, .. }));
    }
}
