use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::catalog::{self, FilterSpec};
use crate::error::ApiError;
use crate::models::{NewProduct, ProductUpdate};
use crate::AppState;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("EcoMart API is running")
}

pub async fn get_products(
    data: web::Data<AppState>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let spec = FilterSpec::parse(&params);
    let store = Arc::clone(&data.store);
    let products = web::block(move || catalog::execute(store.as_ref(), &spec)).await??;
    Ok(HttpResponse::Ok().json(products))
}

pub async fn get_product(
    data: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let store = Arc::clone(&data.store);
    let product = web::block(move || catalog::find_product(store.as_ref(), id))
        .await??
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn create_product(
    data: web::Data<AppState>,
    product: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let new_product = product.into_inner();
    new_product.validate().map_err(ApiError::Validation)?;

    let store = Arc::clone(&data.store);
    let product = web::block(move || store.insert(new_product)).await??;
    info!(id = product.id, category = %product.category, "product created");
    Ok(HttpResponse::Created().json(product))
}

pub async fn update_product(
    data: web::Data<AppState>,
    id: web::Path<i32>,
    changes: web::Json<ProductUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let changes = changes.into_inner();
    changes.validate().map_err(ApiError::Validation)?;

    let store = Arc::clone(&data.store);
    let product = web::block(move || store.update(id, changes))
        .await??
        .ok_or(ApiError::NotFound)?;
    info!(id, "product updated");
    Ok(HttpResponse::Ok().json(product))
}

pub async fn delete_product(
    data: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let store = Arc::clone(&data.store);
    if !web::block(move || store.delete(id)).await?? {
        return Err(ApiError::NotFound);
    }
    info!(id, "product deleted");
    Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
}
