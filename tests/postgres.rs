//! Runs the catalog against PostgreSQL. Skipped unless `TEST_DATABASE_URL`
//! points at a database whose `products` table may be wiped.

use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

use ecomart::catalog::{self, FilterSpec};
use ecomart::db::{init_pool, run_migrations, PgProductStore};
use ecomart::models::{Category, NewProduct, ProductUpdate};
use ecomart::settings::DatabaseSettings;
use ecomart::store::ProductStore;

// every test truncates the same table
static DB_LOCK: Mutex<()> = Mutex::new(());

fn store() -> Option<PgProductStore> {
    let url = env::var("TEST_DATABASE_URL").ok()?;
    let pool = init_pool(&DatabaseSettings {
        url,
        pool_size: 2,
        timeout_seconds: 5,
    })
    .unwrap();
    run_migrations(&pool).unwrap();
    let store = PgProductStore::new(pool);
    store.clear().unwrap();
    Some(store)
}

fn new_product(name: &str, description: &str, price: f64, category: Category) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        images: vec!["img.jpg".to_string()],
        eco_rating: 4.5,
        materials: vec![],
        features: vec![],
        certifications: vec![],
        stock: 5,
        is_featured: false,
    }
}

fn query(pairs: &[(&str, &str)]) -> FilterSpec {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    FilterSpec::parse(&params)
}

fn names(store: &PgProductStore, spec: &FilterSpec) -> Vec<String> {
    catalog::execute(store, spec)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect()
}

fn seed(store: &PgProductStore) {
    for product in [
        new_product("Bamboo Toothbrush", "Biodegradable handle", 10.99, Category::ZeroWastePersonalCare),
        new_product("Cutlery Set", "Portable bamboo utensils", 9.99, Category::SustainableKitchen),
        new_product("Cork Yoga Mat", "100% natural cork", 45.0, Category::EcoLifestyle),
        new_product("Glass Jar", "Reusable 100 percent", 9.99, Category::ReusableHousehold),
    ] {
        store.insert(product).unwrap();
    }
}

#[test]
fn filters_and_sorts_in_sql() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let Some(store) = store() else { return };
    seed(&store);

    assert_eq!(
        names(&store, &query(&[("search", "BAMBOO"), ("sort", "price_asc")])),
        vec!["Cutlery Set", "Bamboo Toothbrush"]
    );
    // equal prices tie-break on insertion id
    assert_eq!(
        names(&store, &query(&[("maxPrice", "10"), ("sort", "price_desc")])),
        vec!["Cutlery Set", "Glass Jar"]
    );
    assert_eq!(
        names(&store, &query(&[("category", "Eco Lifestyle,Nope")])),
        vec!["Cork Yoga Mat"]
    );
    assert_eq!(names(&store, &query(&[("search", "100%")])), vec!["Cork Yoga Mat"]);
    assert!(names(&store, &query(&[("search", "_")])).is_empty());
}

#[test]
fn nul_characters_never_reach_the_database() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let Some(store) = store() else { return };
    seed(&store);

    assert_eq!(names(&store, &query(&[("search", "\0")])).len(), 4);
    assert_eq!(
        names(&store, &query(&[("search", "bam\0boo"), ("sort", "price_asc")])),
        vec!["Cutlery Set", "Bamboo Toothbrush"]
    );
    assert!(names(&store, &query(&[("category", "bam\0boo")])).is_empty());
    assert_eq!(
        names(&store, &query(&[("category", "Eco Life\0style")])),
        vec!["Cork Yoga Mat"]
    );
}

#[test]
fn mutations_round_trip() {
    let _guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let Some(store) = store() else { return };

    let created = store
        .insert(new_product("Solar Lamp", "Garden light", 20.0, Category::SolarEnergySaving))
        .unwrap();
    let updated = store
        .update(
            created.id,
            ProductUpdate {
                price: Some(18.5),
                ..ProductUpdate::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(updated.price, 18.5);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(catalog::find_product(&store, created.id).unwrap(), Some(updated));

    assert!(store.delete(created.id).unwrap());
    assert!(!store.delete(created.id).unwrap());
    assert!(store.update(created.id, ProductUpdate::default()).unwrap().is_none());
}
