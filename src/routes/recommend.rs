use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{score_complexity, Recommender, RecommendOutcome};
use crate::models::{
    ComplexityRequest, ComplexityResponse, ErrorResponse, HealthResponse, NoMatchesResponse,
    RecommendRequest, RecommendResponse, SuggestQuery, SuggestResponse, TechnologiesResponse,
};
use crate::services::InsightsClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub insights: Option<Arc<InsightsClient>>,
    pub default_location: String,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/technologies", web::get().to(list_technologies))
        .route("/technologies/suggest", web::get().to(suggest_technologies))
        .route("/complexity", web::post().to(score_analysis))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalogs = state.recommender.catalogs();

    // An empty supplier catalog still serves technology suggestions
    let status = if catalogs.suppliers.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        suppliers_loaded: catalogs.suppliers.len(),
        technologies_loaded: catalogs.technologies.len(),
        insights_enabled: state.insights.is_some(),
    })
}

/// List known technologies
///
/// GET /api/v1/technologies
async fn list_technologies(state: web::Data<AppState>) -> impl Responder {
    let technologies = state
        .recommender
        .catalogs()
        .technologies
        .iter()
        .map(|t| t.name.clone())
        .collect();

    HttpResponse::Ok().json(TechnologiesResponse {
        success: true,
        technologies,
    })
}

/// Ranked technologies for a complexity score
///
/// GET /api/v1/technologies/suggest?complexity=7
async fn suggest_technologies(
    state: web::Data<AppState>,
    query: web::Query<SuggestQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(SuggestResponse {
        complexity_score: query.complexity,
        tech_recommendations: state.recommender.suggest_technologies(query.complexity),
    })
}

/// Score a free-text complexity analysis
///
/// POST /api/v1/complexity
async fn score_analysis(req: web::Json<ComplexityRequest>) -> impl Responder {
    HttpResponse::Ok().json(ComplexityResponse {
        complexity_score: score_complexity(req.analysis.as_deref()),
    })
}

/// Recommend suppliers for a project
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "type": "Residential",
///   "location": "Riyadh",
///   "sizeSqm": 1500,
///   "budget": 2000000,
///   "timelineMonths": 12,
///   "techNeeds": ["Precast system"],
///   "complexityScore": 6,
///   "complexityAnalysis": "Complexity Score: 6/10"
/// }
/// ```
///
/// When no supplier offers a requested technology the reply is `success: false`
/// with suggested technologies instead of an error status.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let (project, analysis) = req.into_inner().into_project(&state.default_location);

    tracing::info!(
        "Recommendation request {}: location={:?}, techNeeds={:?}",
        request_id,
        project.location,
        project.tech_needs
    );

    let recommendation = state.recommender.recommend(&project, analysis.as_deref());

    match recommendation.outcome {
        RecommendOutcome::NoMatches { message, suggested_technologies } => {
            tracing::info!("Request {}: {}", request_id, message);

            HttpResponse::Ok().json(NoMatchesResponse {
                success: false,
                request_id,
                message,
                tech_recommendations: recommendation.tech_recommendations,
                suggested_technologies,
            })
        }
        RecommendOutcome::Matched { total_matches, suppliers, project_summary, estimate } => {
            // Insights are best-effort and never block the ranked results
            let ai_insights = match &state.insights {
                Some(client) => match client
                    .summarize(&project_summary, recommendation.complexity_score, &suppliers)
                    .await
                {
                    Ok(insights) => Some(insights),
                    Err(e) => {
                        tracing::warn!("Insights unavailable for request {}: {}", request_id, e);
                        None
                    }
                },
                None => None,
            };

            tracing::info!(
                "Returning {} of {} matching suppliers for request {}",
                suppliers.len(),
                total_matches,
                request_id
            );

            HttpResponse::Ok().json(RecommendResponse {
                success: true,
                request_id,
                project_complexity: recommendation.complexity_score,
                complexity_analysis: recommendation.complexity_analysis,
                total_matches,
                suppliers,
                tech_recommendations: recommendation.tech_recommendations,
                ai_insights,
                project_summary,
                estimate,
            })
        }
    }
}
