use actix_web::{web, HttpResponse, Responder};
use log::{debug, info, warn};

use crate::error::ApiError;
use crate::kv_store::KeyStore;
use crate::types::{KeyRequest, KeyResponse, UpdateResponse};

pub async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("OK")
}

pub async fn get_key(store: web::Data<KeyStore>) -> Result<HttpResponse, ApiError> {
    let key = store.get().await;
    if key.is_empty() {
        debug!("GET /key requested before a key was set");
        return Err(ApiError::NotSet);
    }
    Ok(HttpResponse::Ok().json(KeyResponse::new(key)))
}

/// Largest `POST /key` body accepted. Anything bigger is an invalid body.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

// The body is read and parsed by hand so a missing or odd Content-Type still
// reaches serde, and an oversized body gets the same JSON error as bad JSON.
pub async fn post_key(
    store: web::Data<KeyStore>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let body = match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            warn!("Failed reading POST /key body: {}", e);
            return Err(ApiError::InvalidBody);
        }
        Err(_) => {
            warn!("Rejected POST /key body over {} bytes", MAX_BODY_BYTES);
            return Err(ApiError::InvalidBody);
        }
    };

    let req: KeyRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected POST /key body: {}", e);
        ApiError::InvalidBody
    })?;

    if req.api_key.is_empty() {
        warn!("Rejected POST /key with empty api_key");
        return Err(ApiError::EmptyKey);
    }

    store.set(req.api_key).await;
    info!("API key updated");
    Ok(HttpResponse::Ok().json(UpdateResponse::default()))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::resource("/key")
            .route(web::get().to(get_key))
            .route(web::post().to(post_key))
            .default_service(web::to(HttpResponse::NotFound)),
    );
}
