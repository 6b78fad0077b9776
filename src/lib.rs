//! Rawasi Recommend - supplier recommendation service for construction projects
//!
//! This library provides the scoring engine behind Rawasi's supplier shortlist:
//! complexity estimation from an analysis text, technology suitability ranking,
//! and supplier matching that fuses region, technology and rating signals.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    match_suppliers, rank_technologies, score_complexity, Catalogs, Matcher, Recommender,
    RecommendOutcome,
};
pub use crate::models::{ProjectRequest, SupplierMatch, SupplierRecord, TechnologyProfile, TechnologySuggestion};
