// Core algorithm exports
pub mod complexity;
pub mod estimate;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod technology;

pub use complexity::{score_complexity, clamp_complexity, DEFAULT_COMPLEXITY};
pub use estimate::{estimate_cost_and_time, ComplexityBand};
pub use filters::{matches_region, find_matching_technology};
pub use matcher::{
    match_suppliers, Catalogs, Matcher, MatchOutcome, Recommendation, RecommendOutcome,
    Recommender, DEFAULT_TECHNOLOGY, DEFAULT_TOP_N,
};
pub use scoring::{calculate_match_score, rating_bonus};
pub use technology::rank_technologies;
