//! Replaces the PostgreSQL catalog with the seed products.

use std::error::Error;

use tracing::info;

use ecomart::db::{init_pool, run_migrations, PgProductStore};
use ecomart::settings::Settings;
use ecomart::store::ProductStore;
use ecomart::{logging, seed};

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    logging::init(&settings.log.filter);

    let pool = init_pool(&settings.database)?;
    run_migrations(&pool)?;
    let store = PgProductStore::new(pool);

    let cleared = store.clear()?;
    info!(cleared, "cleared existing products");

    let products = seed::seed_catalog();
    let count = products.len();
    for product in products {
        store.insert(product)?;
    }
    info!(count, "seeding completed");
    Ok(())
}
