//! EcoMart storefront backend: catalog browsing with combinable filters and
//! deterministic sorting, plus a thin product admin surface.

pub mod catalog;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod seed;
pub mod settings;
pub mod store;

use std::sync::Arc;

use actix_web::web;

use crate::error::ApiError;
use crate::store::ProductStore;

pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        AppState { store }
    }
}

/// Registers every route and the JSON/path error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, _req| ApiError::NotFound.into()))
    .route("/", web::get().to(handlers::index))
    .service(
        web::scope("/api/products")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::get_products))
                    .route(web::post().to(handlers::create_product)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::get_product))
                    .route(web::put().to(handlers::update_product))
                    .route(web::delete().to(handlers::delete_product)),
            ),
    );
}
