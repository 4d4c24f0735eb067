use tracing::info;

use crate::catalog::{compile_catalog_query, FilterSpec};
use crate::error::StoreError;
use crate::models::{Category, NewProduct};
use crate::store::ProductStore;

#[allow(clippy::too_many_arguments)]
fn seed_product(
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    image: &str,
    eco_rating: f64,
    materials: &[&str],
    features: &[&str],
    stock: i32,
) -> NewProduct {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        images: vec![format!(
            "https://images.unsplash.com/{image}?auto=format&fit=crop&q=80&w=800"
        )],
        eco_rating,
        materials: strings(materials),
        features: strings(features),
        certifications: Vec::new(),
        stock,
        is_featured: false,
    }
}

/// The starter catalog shipped with the storefront.
pub fn seed_catalog() -> Vec<NewProduct> {
    vec![
        seed_product(
            "Premium Stainless Steel Water Bottle",
            "Double-walled vacuum insulated water bottle. Keeps drinks cold for 24 hours or hot for 12. Durable, leak-proof, and plastic-free hydration.",
            24.99,
            Category::ReusableHousehold,
            "photo-1602143407151-01114192003f",
            5.0,
            &["Stainless Steel", "Bamboo Cap"],
            &["Insulated", "Leak-proof", "BPA-free"],
            50,
        ),
        seed_product(
            "Organic Cotton Mesh Produce Bags",
            "Set of 5 reusable produce bags. Perfect for grocery shopping and storing fruits and vegetables. Breathable mesh keeps produce fresh longer.",
            15.99,
            Category::ReusableHousehold,
            "photo-1610348725531-843dff563e2c",
            5.0,
            &["Organic Cotton"],
            &["Washable", "Lightweight", "Drawstring closure"],
            100,
        ),
        seed_product(
            "Glass Spray Bottle with Silicone Sleeve",
            "Refillable glass spray bottle for DIY cleaning solutions or watering plants. Comes with a protective silicone sleeve for durability.",
            12.50,
            Category::ReusableHousehold,
            "photo-1585837575652-2c9066b4a3a3",
            4.5,
            &["Glass", "Silicone", "Recycled Plastic Spray Head"],
            &["Refillable", "Durable", "Multi-purpose"],
            45,
        ),
        seed_product(
            "Bamboo Toothbrush Set (4-Pack)",
            "Biodegradable bamboo toothbrushes with charcoal-infused bristles. An eco-friendly alternative to plastic toothbrushes.",
            10.99,
            Category::ZeroWastePersonalCare,
            "photo-1607613009820-a29f7bb6dc2d",
            5.0,
            &["Bamboo", "Nylon-4 Bristles"],
            &["Biodegradable Handle", "Antimicrobial", "Recyclable packaging"],
            200,
        ),
        seed_product(
            "Solid Shampoo Bar - Lavender & Mint",
            "Concentrated shampoo bar that replaces up to 3 plastic bottles. Handcrafted with natural ingredients for healthy, shiny hair.",
            11.95,
            Category::ZeroWastePersonalCare,
            "photo-1600857544200-b2f666a9a2ec",
            5.0,
            &["Natural Oils", "Essential Oils"],
            &["Plastic-free", "Vegan", "Cruelty-free"],
            80,
        ),
        seed_product(
            "Natural Deodorant Stick",
            "Aluminum-free natural deodorant in a biodegradable additives-free paper tube. Long-lasting protection without harsh chemicals.",
            14.00,
            Category::ZeroWastePersonalCare,
            "photo-1629198728263-125032685934",
            4.8,
            &["Coconut Oil", "Shea Butter", "Cardboard Tube"],
            &["Aluminum-free", "Compostable packaging"],
            60,
        ),
        seed_product(
            "Beeswax Food Wraps (Variety Pack)",
            "Natural alternative to plastic wrap. Washable, reusable, and compostable. Set of 3 sizes (Small, Medium, Large).",
            18.99,
            Category::SustainableKitchen,
            "photo-1622396342674-517812eb1e56",
            5.0,
            &["Organic Cotton", "Beeswax", "Jojoba Oil"],
            &["Reusable", "Plastic-free", "Biodegradable"],
            75,
        ),
        seed_product(
            "Bamboo Cutlery Travel Set",
            "Portable bamboo utensil set with a carrying pouch. Includes fork, spoon, knife, straw, and cleaner. Ideal for lunch on the go.",
            9.99,
            Category::SustainableKitchen,
            "photo-1596701062351-8c2c14d1fdd0",
            5.0,
            &["Bamboo", "Cotton Pouch"],
            &["Lightweight", "Durable", "Travel-friendly"],
            120,
        ),
        seed_product(
            "Countertop Compost Bin",
            "Stylish stainless steel compost bin with charcoal filter to absorb odors. Makes collecting kitchen scraps easy and odor-free.",
            34.50,
            Category::SustainableKitchen,
            "photo-1611566497745-0d3a771c5685",
            4.5,
            &["Stainless Steel", "Charcoal Filter"],
            &["Odor-blocking", "Dishwasher safe", "1.3 Gallon"],
            30,
        ),
        seed_product(
            "Cork Yoga Mat",
            "Non-slip natural cork yoga mat. Antimicrobial, eco-friendly, and provides excellent grip even when sweaty.",
            45.00,
            Category::EcoLifestyle,
            "photo-1593164842264-85460449a6a0",
            5.0,
            &["Natural Cork", "Rubber Base"],
            &["Non-slip", "Antimicrobial", "Sustainable"],
            25,
        ),
        seed_product(
            "Recycled Paper Notebook",
            "Hardcover notebook made from 100% recycled paper. Lay-flat design, perfect for journaling or taking notes at work.",
            16.00,
            Category::EcoLifestyle,
            "photo-1544816155-12df9643f363",
            5.0,
            &["Recycled Paper", "Soy Ink"],
            &["Acid-free", "Dot grid", "FSC Certified"],
            150,
        ),
        seed_product(
            "Portable Solar Power Bank",
            "20000mAh solar charger for smartphones and tablets. Waterproof and durable, perfect for camping and outdoor adventures.",
            49.99,
            Category::SolarEnergySaving,
            "photo-1623949576395-5cb5f7b0292b",
            4.2,
            &["Recycled Plastic", "Solar Cells", "Lithium Battery"],
            &["Solar Charging", "Waterproof", "Dual USB"],
            40,
        ),
        seed_product(
            "Solar Garden Lights (4-Pack)",
            "Decorative solar-powered LED garden lights. Auto on/off sensor. Adds a warm glow to your walkway or patio without electricity.",
            28.00,
            Category::SolarEnergySaving,
            "photo-1563820258079-052202613ce5",
            5.0,
            &["Stainless Steel", "Glass", "Solar Panel"],
            &["Weather-resistant", "Auto sensor", "Wire-free"],
            60,
        ),
    ]
}

/// Inserts the seed catalog when `store` holds no products. Returns how many were added.
pub fn seed_if_empty(store: &dyn ProductStore) -> Result<usize, StoreError> {
    let existing = store.find_matching(&compile_catalog_query(&FilterSpec::default()))?;
    if !existing.is_empty() {
        info!(existing = existing.len(), "catalog already populated, skipping seed");
        return Ok(0);
    }

    let products = seed_catalog();
    let count = products.len();
    for product in products {
        store.insert(product)?;
    }
    info!(count, "seeded catalog");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProductStore;

    #[test]
    fn seed_products_are_valid() {
        for product in seed_catalog() {
            assert!(product.validate().is_ok(), "{} is invalid", product.name);
        }
    }

    #[test]
    fn seeding_only_fills_an_empty_store() {
        let store = InMemoryProductStore::new();
        assert_eq!(seed_if_empty(&store).unwrap(), seed_catalog().len());
        assert_eq!(seed_if_empty(&store).unwrap(), 0);
    }
}
