use crate::models::{CreateLocationRequest, ErrorResponse, HealthResponse};
use crate::services::LocationService;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub locations: Arc<LocationService>,
}

/// Configure all location-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/location", web::get().to(list_locations))
        .route("/location", web::post().to(create_location))
        // tail pattern so an empty id segment reaches the 400 branch
        // instead of falling through to the router's 404
        .route("/location/{cuid:.*}", web::delete().to(delete_location));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.locations.store_healthy().await;

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List locations endpoint
///
/// GET /api/location
async fn list_locations(state: web::Data<AppState>) -> impl Responder {
    match state.locations.get_locations().await {
        Ok(locations) => HttpResponse::Ok().json(locations),
        Err(e) => {
            tracing::error!("Failed to list locations: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}

/// Create location endpoint
///
/// POST /api/location
///
/// Request body:
/// ```json
/// {
///   "name": "Home",
///   "latitude": 10,
///   "longitude": 20,
///   "address": "1 Main St"
/// }
/// ```
async fn create_location(
    state: web::Data<AppState>,
    req: web::Json<CreateLocationRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_location request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::missing_fields());
    }

    let Some(draft) = req.into_inner().into_draft() else {
        return HttpResponse::BadRequest().json(ErrorResponse::missing_fields());
    };

    match state.locations.create_location(draft).await {
        Ok(created) => {
            tracing::info!("Created location {}", created.cuid);
            HttpResponse::Created().json(created)
        }
        Err(e) => {
            tracing::error!("Failed to create location: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}

/// Delete location endpoint
///
/// DELETE /api/location/{cuid}
async fn delete_location(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let cuid = path.into_inner();

    if cuid.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::missing_fields());
    }

    match state.locations.delete_location(&cuid).await {
        Ok(()) => HttpResponse::Accepted().json(serde_json::json!({})),
        Err(e) => {
            tracing::error!("Failed to delete location {}: {}", cuid, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
