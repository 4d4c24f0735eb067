use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ECO_RATING: f64 = 4.5;
pub const MIN_ECO_RATING: f64 = 1.0;
pub const MAX_ECO_RATING: f64 = 5.0;

/// The closed set of catalog categories, serialized by their display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Reusable Household")]
    ReusableHousehold,
    #[serde(rename = "Zero-Waste Personal Care")]
    ZeroWastePersonalCare,
    #[serde(rename = "Sustainable Kitchen")]
    SustainableKitchen,
    #[serde(rename = "Eco Lifestyle")]
    EcoLifestyle,
    #[serde(rename = "Solar & Energy-Saving")]
    SolarEnergySaving,
    #[serde(rename = "Sustainable Fashion")]
    SustainableFashion,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::ReusableHousehold,
        Category::ZeroWastePersonalCare,
        Category::SustainableKitchen,
        Category::EcoLifestyle,
        Category::SolarEnergySaving,
        Category::SustainableFashion,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ReusableHousehold => "Reusable Household",
            Category::ZeroWastePersonalCare => "Zero-Waste Personal Care",
            Category::SustainableKitchen => "Sustainable Kitchen",
            Category::EcoLifestyle => "Eco Lifestyle",
            Category::SolarEnergySaving => "Solar & Energy-Saving",
            Category::SustainableFashion => "Sustainable Fashion",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category label {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub images: Vec<String>,
    pub eco_rating: f64,
    pub materials: Vec<String>,
    pub features: Vec<String>,
    pub certifications: Vec<String>,
    pub stock: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

fn default_eco_rating() -> f64 {
    DEFAULT_ECO_RATING
}

/// Payload for creating a product. `id` and `createdAt` are assigned by the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub images: Vec<String>,
    #[serde(default = "default_eco_rating")]
    pub eco_rating: f64,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub is_featured: bool,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        validate_price(self.price)?;
        validate_images(&self.images)?;
        validate_eco_rating(self.eco_rating)?;
        validate_stock(self.stock)
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub images: Option<Vec<String>>,
    pub eco_rating: Option<f64>,
    pub materials: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub stock: Option<i32>,
    pub is_featured: Option<bool>,
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(images) = &self.images {
            validate_images(images)?;
        }
        if let Some(rating) = self.eco_rating {
            validate_eco_rating(rating)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == ProductUpdate::default()
    }

    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(rating) = self.eco_rating {
            product.eco_rating = rating;
        }
        if let Some(materials) = self.materials {
            product.materials = materials;
        }
        if let Some(features) = self.features {
            product.features = features;
        }
        if let Some(certifications) = self.certifications {
            product.certifications = certifications;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(is_featured) = self.is_featured {
            product.is_featured = is_featured;
        }
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty".to_string());
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Product description cannot be empty".to_string());
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("Product price must be a non-negative number".to_string());
    }
    Ok(())
}

fn validate_images(images: &[String]) -> Result<(), String> {
    if images.is_empty() || images.iter().any(|image| image.trim().is_empty()) {
        return Err("Product needs at least one non-empty image URL".to_string());
    }
    Ok(())
}

fn validate_eco_rating(rating: f64) -> Result<(), String> {
    if !rating.is_finite() || !(MIN_ECO_RATING..=MAX_ECO_RATING).contains(&rating) {
        return Err(format!(
            "Eco rating must be between {MIN_ECO_RATING} and {MAX_ECO_RATING}"
        ));
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<(), String> {
    if stock < 0 {
        return Err("Stock cannot be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottle() -> NewProduct {
        NewProduct {
            name: "Steel Bottle".to_string(),
            description: "Insulated bottle".to_string(),
            price: 24.99,
            category: Category::ReusableHousehold,
            images: vec!["bottle.jpg".to_string()],
            eco_rating: DEFAULT_ECO_RATING,
            materials: vec![],
            features: vec![],
            certifications: vec![],
            stock: 0,
            is_featured: false,
        }
    }

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert!("Gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn new_product_defaults_apply_when_fields_are_missing() {
        let product: NewProduct = serde_json::from_value(serde_json::json!({
            "name": "Cork Yoga Mat",
            "description": "Non-slip cork mat",
            "price": 45.0,
            "category": "Eco Lifestyle",
            "images": ["mat.jpg"],
        }))
        .unwrap();

        assert_eq!(product.eco_rating, DEFAULT_ECO_RATING);
        assert_eq!(product.stock, 0);
        assert!(!product.is_featured);
        assert!(product.materials.is_empty());
    }

    #[test]
    fn validation_rejects_each_broken_invariant() {
        assert!(bottle().validate().is_ok());

        let mut product = bottle();
        product.name = "   ".to_string();
        assert!(product.validate().is_err());

        let mut product = bottle();
        product.price = -0.01;
        assert!(product.validate().is_err());

        let mut product = bottle();
        product.price = f64::NAN;
        assert!(product.validate().is_err());

        let mut product = bottle();
        product.images.clear();
        assert!(product.validate().is_err());

        let mut product = bottle();
        product.eco_rating = 5.5;
        assert!(product.validate().is_err());

        let mut product = bottle();
        product.stock = -1;
        assert!(product.validate().is_err());
    }

    #[test]
    fn update_only_validates_present_fields() {
        assert!(ProductUpdate::default().validate().is_ok());
        assert!(ProductUpdate::default().is_empty());

        let update = ProductUpdate {
            eco_rating: Some(0.5),
            ..ProductUpdate::default()
        };
        assert!(update.validate().is_err());
    }
}
