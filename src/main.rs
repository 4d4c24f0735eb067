use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::info;

use ecomart::db::{init_pool, run_migrations, PgProductStore};
use ecomart::error::StoreError;
use ecomart::settings::{Settings, StorageBackend};
use ecomart::store::{InMemoryProductStore, ProductStore};
use ecomart::{configure, logging, seed, AppState};

fn build_store(settings: &Settings) -> Result<Arc<dyn ProductStore>, StoreError> {
    let store: Arc<dyn ProductStore> = match settings.storage.backend {
        StorageBackend::Postgres => {
            let pool = init_pool(&settings.database)?;
            let applied = run_migrations(&pool)?;
            info!(applied, "database migrations up to date");
            Arc::new(PgProductStore::new(pool))
        }
        StorageBackend::Memory => Arc::new(InMemoryProductStore::new()),
    };

    if settings.storage.seed_on_start {
        seed::seed_if_empty(store.as_ref())?;
    }
    Ok(store)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = Settings::load().map_err(io::Error::other)?;
    logging::init(&settings.log.filter);

    let store = build_store(&settings).map_err(io::Error::other)?;
    let app_state = web::Data::new(AppState::new(store));
    let allowed_origin = settings.cors.allowed_origin.clone();

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        backend = ?settings.storage.backend,
        "starting HTTP server"
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((settings.server.host.as_str(), settings.server.port))?
    .run()
    .await
}
