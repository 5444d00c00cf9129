// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AddressSuggestion, DraftLocation, Location};
pub use requests::CreateLocationRequest;
pub use responses::{ErrorResponse, HealthResponse};
