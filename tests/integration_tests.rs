// Integration tests for Rawasi Recommend

use actix_web::{test, web, App};
use rawasi_recommend::core::{Catalogs, Matcher, Recommender};
use rawasi_recommend::routes::{configure_routes, recommend::AppState};
use rawasi_recommend::services::{default_technologies, parse_suppliers, InsightsClient};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const CATALOG: &str = r#"[
    {
        "Contractor_Name": "Najd Precast",
        "Building_Tech_Type": "Precast Concrete System",
        "Preferred_Region": "Riyadh",
        "totalScore": 4.5,
        "Alliance_Company_Name": "Najd Group",
        "Contact_Person": "Sara Al-Otaibi",
        "Email": "sales@najd.example",
        "Mobile_Number": "+966500000001"
    },
    {
        "Factory_Name": "Coastal Steel",
        "Tech_Type": "Steel Structure",
        "Preferred_Region": "Jeddah",
        "totalScore": 3.8
    },
    {
        "Contractor_Name": "Kingdom Formwork",
        "Building_Tech_Type": "Tunnel Forms",
        "Preferred_Region": "All regions",
        "totalScore": "N/A"
    },
    {
        "Building_Tech_Type": "BIM",
        "Preferred_Region": "Riyadh"
    }
]"#;

fn app_state(insights: Option<Arc<InsightsClient>>) -> AppState {
    let suppliers = parse_suppliers(CATALOG).unwrap();

    AppState {
        recommender: Recommender::new(
            Catalogs { technologies: default_technologies(), suppliers },
            Matcher::default(),
            5,
        ),
        insights,
        default_location: "Riyadh".to_string(),
    }
}

async fn post_recommend(state: AppState, body: Value) -> Value {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(body)
        .to_request();

    test::call_and_read_body_json(&app, req).await
}

#[actix_web::test]
async fn test_integration_end_to_end_recommendation() {
    let body = post_recommend(
        app_state(None),
        json!({
            "name": "Olaya Towers",
            "location": "Riyadh",
            "techNeeds": ["Precast system", "Tunnel Formwork"],
            "complexityAnalysis": "Complexity Score: 7/10\nExplanation: Twelve floors, repetitive layout"
        }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["projectComplexity"], 7);
    assert_eq!(body["totalMatches"], 2);

    let suppliers = body["suppliers"].as_array().unwrap();
    assert_eq!(suppliers[0]["name"], "Najd Precast");
    assert_eq!(suppliers[0]["matchScore"], 115.0);
    assert_eq!(suppliers[0]["matchedTechnology"], "Precast system");
    assert_eq!(suppliers[0]["phone"], "+966500000001");

    // "All regions" covers Riyadh; absent rating adds nothing
    assert_eq!(suppliers[1]["name"], "Kingdom Formwork");
    assert_eq!(suppliers[1]["matchScore"], 100.0);
    assert_eq!(suppliers[1]["rating"], Value::Null);
    assert_eq!(suppliers[1]["alliance"], "N/A");

    assert!(body["techRecommendations"].as_array().unwrap().len() <= 5);
    assert_eq!(body["projectSummary"]["location"], "Riyadh");
    assert!(body["aiInsights"].is_null());
    assert!(body["requestId"].as_str().is_some());
}

#[actix_web::test]
async fn test_integration_no_matches_is_soft_failure() {
    let body = post_recommend(
        app_state(None),
        json!({ "location": "Jeddah", "techNeeds": ["BIM"] }),
    )
    .await;

    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("BIM"));

    let suggested = body["suggestedTechnologies"].as_array().unwrap();
    assert!(!suggested.is_empty());
    assert!(suggested.len() <= 5);
    assert_eq!(
        suggested.len(),
        body["techRecommendations"].as_array().unwrap().len()
    );
}

#[actix_web::test]
async fn test_integration_region_does_not_gate() {
    let body = post_recommend(
        app_state(None),
        json!({ "location": "Riyadh", "techNeeds": ["Steel Structer"] }),
    )
    .await;

    assert_eq!(body["success"], true);
    let supplier = &body["suppliers"][0];
    assert_eq!(supplier["name"], "Coastal Steel");
    assert_eq!(supplier["regionMatch"], false);
    assert_eq!(supplier["matchScore"], 58.0);
}

#[actix_web::test]
async fn test_integration_defaults_location() {
    let body = post_recommend(
        app_state(None),
        json!({ "techNeeds": ["Precast system"], "complexityScore": 6 }),
    )
    .await;

    assert_eq!(body["projectComplexity"], 6);
    assert_eq!(body["projectSummary"]["location"], "Riyadh");
    assert_eq!(body["suppliers"][0]["regionMatch"], true);
}

#[actix_web::test]
async fn test_integration_blank_analysis_keeps_supplied_score() {
    let body = post_recommend(
        app_state(None),
        json!({
            "techNeeds": ["Precast system"],
            "complexityScore": 8,
            "complexityAnalysis": ""
        }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["projectComplexity"], 8);
    assert!(body["complexityAnalysis"].is_null());
}

#[actix_web::test]
async fn test_integration_rejects_invalid_complexity() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({ "complexityScore": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_integration_technology_endpoints() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/technologies").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["technologies"].as_array().unwrap().len(), 15);

    let req = test::TestRequest::get()
        .uri("/api/v1/technologies/suggest?complexity=6")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ranked = body["techRecommendations"].as_array().unwrap();
    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked[0]["suitabilityScore"], 100.0);

    let req = test::TestRequest::post()
        .uri("/api/v1/complexity")
        .set_json(json!({ "analysis": "Complexity Score: 12/10" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["complexityScore"], 10);
}

#[actix_web::test]
async fn test_integration_health_counts() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(None)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["suppliersLoaded"], 4);
    assert_eq!(body["technologiesLoaded"], 15);
}

#[actix_web::test]
async fn test_integration_insights_attached() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/summarize")
        .with_status(200)
        .with_body("```json\n{\"summary\": \"Najd Precast leads on rating\", \"key_advantages\": [\"Local\"]}\n```")
        .create_async()
        .await;

    let client = InsightsClient::new(
        format!("{}/summarize", server.url()),
        None,
        Duration::from_secs(5),
    )
    .unwrap();

    let body = post_recommend(
        app_state(Some(Arc::new(client))),
        json!({ "location": "Riyadh", "techNeeds": ["Precast system"] }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["aiInsights"]["summary"], "Najd Precast leads on rating");
}

#[actix_web::test]
async fn test_integration_insight_failure_does_not_block() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/summarize")
        .with_status(500)
        .create_async()
        .await;

    let client = InsightsClient::new(
        format!("{}/summarize", server.url()),
        None,
        Duration::from_secs(5),
    )
    .unwrap();

    let body = post_recommend(
        app_state(Some(Arc::new(client))),
        json!({ "location": "Riyadh", "techNeeds": ["Precast system"] }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["totalMatches"], 1);
    assert!(body["aiInsights"].is_null());
}
