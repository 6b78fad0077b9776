use serde::{Deserialize, Serialize};

/// Lowest complexity score on the 1-10 scale
pub const MIN_COMPLEXITY: u8 = 1;

/// Highest complexity score on the 1-10 scale
pub const MAX_COMPLEXITY: u8 = 10;

/// Inclusive complexity bounds a construction technique is suited for
///
/// Invariant: `1 <= min <= max <= 10`. Only constructible through [`ComplexityRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityRange {
    min: u8,
    max: u8,
}

impl ComplexityRange {
    pub fn new(min: u8, max: u8) -> Option<Self> {
        if min < MIN_COMPLEXITY || max > MAX_COMPLEXITY || min > max {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    #[inline]
    pub fn contains(&self, score: u8) -> bool {
        self.min <= score && score <= self.max
    }

    /// Midpoint of the range; may fall on a half point
    #[inline]
    pub fn center(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

/// Static reference entry for one construction technique
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyProfile {
    pub name: String,
    #[serde(rename = "complexityRange")]
    pub complexity_range: ComplexityRange,
    pub aliases: Vec<String>,
}

impl TechnologyProfile {
    pub fn new(name: impl Into<String>, complexity_range: ComplexityRange, aliases: &[&str]) -> Self {
        Self {
            name: name.into(),
            complexity_range,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Supplier catalog entry
///
/// `name` and `technology` are optional here because the catalog source does not
/// guarantee them; records missing either are never matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub name: Option<String>,
    pub technology: Option<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub alliance: Option<String>,
    #[serde(rename = "contactPerson", default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl SupplierRecord {
    /// Name, treating an empty string as absent
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Technology field, treating an empty string as absent
    pub fn technology_field(&self) -> Option<&str> {
        self.technology.as_deref().filter(|t| !t.is_empty())
    }
}

/// Project requirements for a single recommendation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default = "default_project_type")]
    pub project_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "sizeSqm", default = "default_size_sqm")]
    pub size_sqm: f64,
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(rename = "timelineMonths", default = "default_timeline_months")]
    pub timeline_months: u32,
    #[serde(rename = "techNeeds", default)]
    pub tech_needs: Vec<String>,
    #[serde(rename = "complexityScore", default)]
    pub complexity_score: Option<u8>,
}

impl ProjectRequest {
    /// A request with the given location and technologies and defaults elsewhere
    pub fn new(location: impl Into<String>, tech_needs: Vec<String>) -> Self {
        Self {
            name: String::new(),
            project_type: default_project_type(),
            location: location.into(),
            size_sqm: default_size_sqm(),
            budget: default_budget(),
            timeline_months: default_timeline_months(),
            tech_needs,
            complexity_score: None,
        }
    }
}

pub(crate) fn default_project_type() -> String { "Residential".to_string() }
pub(crate) fn default_size_sqm() -> f64 { 1500.0 }
pub(crate) fn default_budget() -> f64 { 2_000_000.0 }
pub(crate) fn default_timeline_months() -> u32 { 12 }

/// One ranked technology suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologySuggestion {
    pub technology: String,
    #[serde(rename = "suitabilityScore")]
    pub suitability_score: f64,
}

/// Scored supplier that passed the technology gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierMatch {
    pub name: String,
    pub alliance: String,
    pub region: String,
    pub technology: String,
    pub rating: Option<f64>,
    pub contact: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "regionMatch")]
    pub region_match: bool,
    #[serde(rename = "techMatch")]
    pub tech_match: bool,
    #[serde(rename = "matchedTechnology")]
    pub matched_technology: Option<String>,
}

/// Project fields echoed back alongside a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub location: String,
    pub budget: f64,
    pub timeline: u32,
    pub technologies: Vec<String>,
}

impl From<&ProjectRequest> for ProjectSummary {
    fn from(project: &ProjectRequest) -> Self {
        Self {
            name: project.name.clone(),
            project_type: project.project_type.clone(),
            location: project.location.clone(),
            budget: project.budget,
            timeline: project.timeline_months,
            technologies: project.tech_needs.clone(),
        }
    }
}

/// Heuristic cost and duration estimate for a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    #[serde(rename = "estCost")]
    pub est_cost: f64,
    #[serde(rename = "estTimeMonths")]
    pub est_time_months: f64,
    pub risk: f64,
}
