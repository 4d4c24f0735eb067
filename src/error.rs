use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures reported by a [`ProductStore`](crate::store::ProductStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("migrations failed: {0}")]
    Migration(String),

    #[error("product {id} is malformed: {reason}")]
    Malformed { id: i32, reason: String },

    #[error("product store lock poisoned")]
    Poisoned,

    #[error("no product ids left to assign")]
    IdsExhausted,
}

/// The only failure the catalog core lets cross its boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product store unavailable")]
    StoreUnavailable(#[from] StoreError),
}

pub const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("product not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("blocking task was cancelled")]
    Blocking,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Catalog(CatalogError::StoreUnavailable(err))
    }
}

impl From<BlockingError> for ApiError {
    fn from(_: BlockingError) -> Self {
        ApiError::Blocking
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(_) | ApiError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::NotFound => "Product not found".to_string(),
            ApiError::Validation(message) => message.clone(),
            ApiError::Catalog(CatalogError::StoreUnavailable(source)) => {
                tracing::error!(error = %source, "product store unavailable");
                GENERIC_FAILURE.to_string()
            }
            ApiError::Blocking => {
                tracing::error!("blocking store call was cancelled");
                GENERIC_FAILURE.to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}
