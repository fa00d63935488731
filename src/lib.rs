// CMS Core - page/section composition model over a generic document store

// Document storage, ids, and scan primitives
pub mod store;

// Typed records for pages, sections, and section templates
pub mod models;

// Content services: page store, section store, template catalog
pub mod services;

// Section renderer dispatch
pub mod render;

// HTTP surface
pub mod api;

// Common utilities
pub mod app_state;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{AppError, AppResult};
