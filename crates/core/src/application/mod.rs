// Application Layer - Use cases over the ports

pub mod ingest;
pub mod mapping;
pub mod seed;

// Re-exports
pub use ingest::{IngestReport, IngestService};
pub use mapping::map_vacancy;
pub use seed::load_companies;
