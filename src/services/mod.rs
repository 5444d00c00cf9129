// Service exports
pub mod locations;
pub mod store;

pub use locations::{LocationError, LocationService};
pub use store::{StoreClient, StoreError};
