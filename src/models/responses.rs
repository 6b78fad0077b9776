use serde::{Deserialize, Serialize};
use crate::models::domain::{CostEstimate, ProjectSummary, SupplierMatch, TechnologySuggestion};

/// Narrative annotation produced by the external insight summarizer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_advantages: Vec<String>,
    #[serde(default)]
    pub potential_risks: Vec<String>,
    #[serde(default)]
    pub recommendations: String,
}

/// Response for a recommendation with at least one matching supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub success: bool,
    pub request_id: String,
    pub project_complexity: u8,
    pub complexity_analysis: Option<String>,
    pub total_matches: usize,
    pub suppliers: Vec<SupplierMatch>,
    pub tech_recommendations: Vec<TechnologySuggestion>,
    pub ai_insights: Option<Insights>,
    pub project_summary: ProjectSummary,
    pub estimate: CostEstimate,
}

/// Soft-failure response when no supplier passes the technology gate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoMatchesResponse {
    pub success: bool,
    pub request_id: String,
    pub message: String,
    pub tech_recommendations: Vec<TechnologySuggestion>,
    pub suggested_technologies: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub suppliers_loaded: usize,
    pub technologies_loaded: usize,
    pub insights_enabled: bool,
}

/// Known technology names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologiesResponse {
    pub success: bool,
    pub technologies: Vec<String>,
}

/// Ranked technologies for a complexity score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub complexity_score: u8,
    pub tech_recommendations: Vec<TechnologySuggestion>,
}

/// Complexity score parsed from an analysis text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityResponse {
    pub complexity_score: u8,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
