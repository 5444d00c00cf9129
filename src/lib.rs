//! MyLocations - location bookmarking service
//!
//! This library provides the CRUD core behind the MyLocations app: a
//! document-store-backed location service, the HTTP API over it, and the
//! headless page state for the browser UI.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::{DraftLocation, Location};
pub use services::{LocationService, StoreClient};
pub use ui::{LocationsApi, ModalState, PageController, PageModel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let model = PageModel::new();
        assert_eq!(model.modal, ModalState::Closed);
    }
}
