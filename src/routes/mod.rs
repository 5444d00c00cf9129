// Route exports
pub mod locations;

use crate::models::ErrorResponse;
use actix_web::{error, web, HttpResponse};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(locations::configure));
}

/// Handle JSON payload errors
///
/// A create body with a missing brace or a wrong-typed field fails before
/// validation runs. It is still a client input error, so it gets the same
/// fixed 400 body the validator path produces.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::missing_fields()),
    )
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse::missing_fields()),
    )
    .into()
}
