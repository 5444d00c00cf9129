// UI exports
pub mod client;
pub mod controller;
pub mod page;

pub use client::{ApiError, LocationsApi};
pub use controller::PageController;
pub use page::{LocationForm, ModalState, PageModel};
