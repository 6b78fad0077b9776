use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{
    default_budget, default_project_type, default_size_sqm, default_timeline_months, ProjectRequest,
};

/// Request to recommend suppliers for a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(max = 200))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    #[serde(rename = "type", default = "default_project_type")]
    pub project_type: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub location: Option<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "sizeSqm", alias = "size_sqm", default = "default_size_sqm")]
    pub size_sqm: f64,
    #[validate(range(min = 0.0))]
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[validate(range(min = 1, max = 600))]
    #[serde(rename = "timelineMonths", alias = "timeline_months", default = "default_timeline_months")]
    pub timeline_months: u32,
    #[validate(length(max = 50))]
    #[serde(rename = "techNeeds", alias = "tech_needs", default)]
    pub tech_needs: Vec<String>,
    #[validate(range(min = 1, max = 10))]
    #[serde(rename = "complexityScore", alias = "complexity_score", default)]
    pub complexity_score: Option<u8>,
    /// Free-text complexity assessment produced upstream from a plan image
    #[serde(rename = "complexityAnalysis", alias = "complexity_analysis", default)]
    pub complexity_analysis: Option<String>,
}

impl RecommendRequest {
    /// Split into the core project request and the optional analysis text
    pub fn into_project(self, default_location: &str) -> (ProjectRequest, Option<String>) {
        let project = ProjectRequest {
            name: self.name,
            project_type: self.project_type,
            location: self
                .location
                .unwrap_or_else(|| default_location.to_string())
                .trim()
                .to_string(),
            size_sqm: self.size_sqm,
            budget: self.budget,
            timeline_months: self.timeline_months,
            tech_needs: self.tech_needs,
            complexity_score: self.complexity_score,
        };
        (project, self.complexity_analysis)
    }
}

/// Request to score a free-text complexity analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityRequest {
    #[serde(default)]
    pub analysis: Option<String>,
}

/// Query for technology suggestions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestQuery {
    #[validate(range(min = 1, max = 10))]
    pub complexity: u8,
}
