//! Application use cases (business logic orchestration).

mod load_catalog;

pub use load_catalog::LoadCatalog;
