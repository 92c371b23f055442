//! Embeddable client core for the food-ordering app.
//!
//! The host UI calls [`setup::bootstrap::bootstrap`] once at startup and
//! keeps the returned [`setup::dependency_injection::DependencyContainer`]
//! for the life of the session: catalog reads go through
//! [`api::catalog::CatalogClient`], cart mutations through
//! [`api::cart::CartClient`].

pub mod api {
    pub mod cart;
    pub mod catalog;
}
pub mod config {
    pub mod app_config;
    pub mod firestore_config;
}
pub mod setup {
    pub mod bootstrap;
    pub mod dependency_injection;
}

pub use api::cart::CartClient;
pub use api::catalog::CatalogClient;
pub use setup::bootstrap::bootstrap;
pub use setup::dependency_injection::DependencyContainer;
