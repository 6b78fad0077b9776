// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ComplexityRange, CostEstimate, ProjectRequest, ProjectSummary, SupplierMatch, SupplierRecord,
    TechnologyProfile, TechnologySuggestion, MAX_COMPLEXITY, MIN_COMPLEXITY,
};
pub use requests::{ComplexityRequest, RecommendRequest, SuggestQuery};
pub use responses::{
    ComplexityResponse, ErrorResponse, HealthResponse, Insights, NoMatchesResponse,
    RecommendResponse, SuggestResponse, TechnologiesResponse,
};
