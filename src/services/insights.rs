use crate::models::{Insights, ProjectSummary, SupplierMatch};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Characters of raw text kept as the summary when the reply is not JSON
const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Errors that can occur when calling the insight summarizer
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Summarizer returned error: {0}")]
    ApiError(String),

    #[error("Empty response from summarizer")]
    EmptyResponse,
}

/// Payload sent to the summarizer
#[derive(Debug, Serialize)]
struct InsightsRequest<'a> {
    project: &'a ProjectSummary,
    #[serde(rename = "complexityScore")]
    complexity_score: u8,
    suppliers: &'a [SupplierMatch],
}

/// Client for the external insight summarizer
///
/// Given the project summary and the top-ranked suppliers, the summarizer returns
/// a short narrative. Its replies are either an [`Insights`] JSON object or free
/// text that may embed one.
pub struct InsightsClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl InsightsClient {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, InsightsError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            api_key,
            client,
        })
    }

    /// Request insights for a ranked shortlist
    pub async fn summarize(
        &self,
        project: &ProjectSummary,
        complexity_score: u8,
        suppliers: &[SupplierMatch],
    ) -> Result<Insights, InsightsError> {
        let payload = InsightsRequest {
            project,
            complexity_score,
            suppliers,
        };

        tracing::debug!("Requesting insights for {} suppliers from {}", suppliers.len(), self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(InsightsError::ApiError(format!(
                "Failed to generate insights: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(InsightsError::EmptyResponse);
        }

        Ok(parse_insights(&body))
    }
}

/// Interpret a summarizer reply
///
/// Prefers JSON inside a fenced code block, then the whole reply as JSON. Anything
/// else becomes a plain-text insight with a truncated summary.
pub fn parse_insights(text: &str) -> Insights {
    let candidate = extract_fenced_json(text).unwrap_or(text).trim();

    if let Ok(insights) = serde_json::from_str::<Insights>(candidate) {
        return insights;
    }

    let preview: String = text.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    Insights {
        summary: format!("{}...", preview),
        key_advantages: Vec::new(),
        potential_risks: Vec::new(),
        recommendations: text.to_string(),
    }
}

fn extract_fenced_json(text: &str) -> Option<&str> {
    let (_, rest) = text
        .split_once("```json")
        .or_else(|| text.split_once("```"))?;
    Some(rest.split("```").next().unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ProjectSummary {
        ProjectSummary {
            name: "Villa".to_string(),
            project_type: "Residential".to_string(),
            location: "Riyadh".to_string(),
            budget: 2_000_000.0,
            timeline: 12,
            technologies: vec!["BIM".to_string()],
        }
    }

    #[test]
    fn test_parse_plain_json() {
        let insights = parse_insights(r#"{"summary": "Good fit", "key_advantages": ["Local"]}"#);
        assert_eq!(insights.summary, "Good fit");
        assert_eq!(insights.key_advantages, vec!["Local"]);
        assert!(insights.potential_risks.is_empty());
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "Here you go:\n```json\n{\"summary\": \"Fenced\", \"recommendations\": \"Go\"}\n```\nThanks";
        let insights = parse_insights(text);
        assert_eq!(insights.summary, "Fenced");
        assert_eq!(insights.recommendations, "Go");
    }

    #[test]
    fn test_parse_free_text_fallback() {
        let text = "a".repeat(250);
        let insights = parse_insights(&text);
        assert_eq!(insights.summary.len(), SUMMARY_PREVIEW_CHARS + 3);
        assert!(insights.summary.ends_with("..."));
        assert_eq!(insights.recommendations, text);
    }

    #[tokio::test]
    async fn test_summarize_against_stub() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/insights")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_body(r#"{"summary": "Two strong precast suppliers", "potential_risks": ["Lead time"]}"#)
            .create_async()
            .await;

        let client = InsightsClient::new(
            format!("{}/insights", server.url()),
            Some("secret".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        let insights = client.summarize(&summary(), 6, &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(insights.summary, "Two strong precast suppliers");
        assert_eq!(insights.potential_risks, vec!["Lead time"]);
    }

    #[tokio::test]
    async fn test_summarize_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/insights")
            .with_status(503)
            .create_async()
            .await;

        let client = InsightsClient::new(format!("{}/insights", server.url()), None, Duration::from_secs(5)).unwrap();

        let result = client.summarize(&summary(), 5, &[]).await;
        assert!(matches!(result, Err(InsightsError::ApiError(_))));
    }
}
