// Service exports
pub mod catalog;
pub mod insights;

pub use catalog::{default_technologies, load_suppliers, parse_suppliers, read_suppliers, technology_profile, CatalogError};
pub use insights::{parse_insights, InsightsClient, InsightsError};
