use std::borrow::Cow;
use std::sync::Arc;
use crate::models::{
    CostEstimate, ProjectRequest, ProjectSummary, SupplierMatch, SupplierRecord,
    TechnologyProfile, TechnologySuggestion,
};
use crate::core::{
    complexity::{clamp_complexity, score_complexity, DEFAULT_COMPLEXITY},
    estimate::estimate_cost_and_time,
    filters::{find_matching_technology, matches_region},
    scoring::calculate_match_score,
    technology::rank_technologies,
};

/// Technology searched for when a project requests none
pub const DEFAULT_TECHNOLOGY: &str = "BIM";

/// Number of suppliers and technology suggestions presented per request
pub const DEFAULT_TOP_N: usize = 5;

/// Placeholder for absent pass-through contact fields
const NOT_AVAILABLE: &str = "N/A";

/// Ranked matches from one matcher run, with the size of the pool they came from
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<SupplierMatch>,
    pub total_candidates: usize,
}

/// Supplier matching orchestrator
///
/// # Pipeline Stages
/// 1. Drop records missing a name or technology
/// 2. Region check (soft signal, +50)
/// 3. Technology check (hard gate, +50)
/// 4. Rating bonus, ranking
#[derive(Debug, Clone)]
pub struct Matcher {
    default_technology: String,
}

impl Matcher {
    pub fn new(default_technology: impl Into<String>) -> Self {
        Self {
            default_technology: default_technology.into(),
        }
    }

    /// Find and rank suppliers for a project
    ///
    /// Only suppliers passing the technology gate are returned, whatever their
    /// region. An empty `tech_needs` searches for the default technology instead.
    /// Equal scores keep catalog order.
    pub fn find_matches(
        &self,
        project: &ProjectRequest,
        suppliers: &[SupplierRecord],
        technologies: &[TechnologyProfile],
    ) -> MatchOutcome {
        let requested = self.effective_technologies(project);

        let mut matches: Vec<SupplierMatch> = suppliers
            .iter()
            .filter_map(|supplier| evaluate_supplier(project, &requested, supplier, technologies))
            .collect();

        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Matched {} of {} suppliers for location {:?} with technologies {:?}",
            matches.len(),
            suppliers.len(),
            project.location,
            requested
        );

        MatchOutcome {
            matches,
            total_candidates: suppliers.len(),
        }
    }

    /// The project's requested technologies, or the default when none were given
    pub fn effective_technologies<'a>(&self, project: &'a ProjectRequest) -> Cow<'a, [String]> {
        if project.tech_needs.is_empty() {
            Cow::Owned(vec![self.default_technology.clone()])
        } else {
            Cow::Borrowed(project.tech_needs.as_slice())
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_TECHNOLOGY)
    }
}

/// Match suppliers with the default fallback technology
pub fn match_suppliers(
    project: &ProjectRequest,
    suppliers: &[SupplierRecord],
    technologies: &[TechnologyProfile],
) -> Vec<SupplierMatch> {
    Matcher::default()
        .find_matches(project, suppliers, technologies)
        .matches
}

fn evaluate_supplier(
    project: &ProjectRequest,
    requested: &[String],
    supplier: &SupplierRecord,
    technologies: &[TechnologyProfile],
) -> Option<SupplierMatch> {
    let name = supplier.display_name()?;
    let supplier_technology = supplier.technology_field()?;

    // Technology is a hard filter; region only moves the score
    let matched_technology =
        find_matching_technology(requested, supplier_technology, technologies)?;
    let region_match = matches_region(&project.location, &supplier.region);

    let (match_score, match_reasons) = calculate_match_score(region_match, true, supplier.rating);

    let or_na = |field: &Option<String>| field.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Some(SupplierMatch {
        name: name.to_string(),
        alliance: or_na(&supplier.alliance),
        region: supplier.region.clone(),
        technology: supplier_technology.to_string(),
        rating: supplier.rating,
        contact: or_na(&supplier.contact_person),
        email: or_na(&supplier.email),
        phone: or_na(&supplier.phone),
        match_score,
        match_reasons,
        region_match,
        tech_match: true,
        matched_technology: Some(matched_technology.to_string()),
    })
}

/// Read-only reference tables, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub technologies: Vec<TechnologyProfile>,
    pub suppliers: Vec<SupplierRecord>,
}

/// Result of a full recommendation run
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub complexity_score: u8,
    pub complexity_analysis: Option<String>,
    /// Top-N technologies for the complexity score
    pub tech_recommendations: Vec<TechnologySuggestion>,
    pub outcome: RecommendOutcome,
}

#[derive(Debug, Clone)]
pub enum RecommendOutcome {
    Matched {
        total_matches: usize,
        /// Top-N suppliers
        suppliers: Vec<SupplierMatch>,
        project_summary: ProjectSummary,
        estimate: CostEstimate,
    },
    /// No supplier passed the technology gate; the caller should present
    /// `suggested_technologies` instead of an empty list
    NoMatches {
        message: String,
        suggested_technologies: Vec<String>,
    },
}

/// Immutable recommendation context shared by all requests
///
/// Cheap to clone; catalogs are behind an `Arc` and never mutated.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalogs: Arc<Catalogs>,
    matcher: Matcher,
    top_n: usize,
    default_complexity: u8,
}

impl Recommender {
    pub fn new(catalogs: Catalogs, matcher: Matcher, top_n: usize) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
            matcher,
            top_n: top_n.max(1),
            default_complexity: DEFAULT_COMPLEXITY,
        }
    }

    /// Complexity used when neither analysis text nor a score is supplied
    pub fn with_default_complexity(mut self, score: u8) -> Self {
        self.default_complexity = clamp_complexity(score as i64);
        self
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn default_complexity(&self) -> u8 {
        self.default_complexity
    }

    /// Resolve a project's complexity score
    ///
    /// Analysis text wins when present, then the caller-supplied score, then the
    /// configured default. Blank analysis text counts as absent.
    pub fn resolve_complexity(&self, project: &ProjectRequest, analysis: Option<&str>) -> u8 {
        match (non_blank(analysis), project.complexity_score) {
            (Some(text), _) => score_complexity(Some(text)),
            (None, Some(score)) => clamp_complexity(score as i64),
            (None, None) => self.default_complexity,
        }
    }

    /// Top-N technologies for a complexity score
    pub fn suggest_technologies(&self, complexity_score: u8) -> Vec<TechnologySuggestion> {
        let mut ranked = rank_technologies(complexity_score, &self.catalogs.technologies);
        ranked.truncate(self.top_n);
        ranked
    }

    /// Run the full pipeline: complexity, technology suggestions, supplier matching
    pub fn recommend(&self, project: &ProjectRequest, analysis: Option<&str>) -> Recommendation {
        let complexity_score = self.resolve_complexity(project, analysis);
        let tech_recommendations = self.suggest_technologies(complexity_score);

        let result = self.matcher.find_matches(
            project,
            &self.catalogs.suppliers,
            &self.catalogs.technologies,
        );

        tracing::debug!(
            "Complexity {} for {:?}: {} of {} suppliers passed the technology gate",
            complexity_score,
            project.name,
            result.matches.len(),
            result.total_candidates
        );

        let outcome = if result.matches.is_empty() {
            let requested = self.matcher.effective_technologies(project);
            RecommendOutcome::NoMatches {
                message: format!(
                    "No suppliers found with selected technologies: {}",
                    requested.join(", ")
                ),
                suggested_technologies: tech_recommendations
                    .iter()
                    .map(|t| t.technology.clone())
                    .collect(),
            }
        } else {
            let total_matches = result.matches.len();
            let mut suppliers = result.matches;
            suppliers.truncate(self.top_n);

            RecommendOutcome::Matched {
                total_matches,
                suppliers,
                project_summary: ProjectSummary::from(project),
                estimate: estimate_cost_and_time(project, complexity_score),
            }
        };

        Recommendation {
            complexity_score,
            complexity_analysis: non_blank(analysis).map(str::to_string),
            tech_recommendations,
            outcome,
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
