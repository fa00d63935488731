// Content services - the operations layer between the HTTP surface and the
// document store

pub mod catalog;
pub mod pages;
pub mod sections;
pub mod seed;
pub mod templates;

pub use pages::PageService;
pub use sections::SectionService;
pub use templates::{SeedOutcome, TemplateCatalog};
