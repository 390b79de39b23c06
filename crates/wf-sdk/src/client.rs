//! HTTP client for the generation endpoint.
//!
//! [`AssistantClient`] exposes each AI feature twice:
//!
//! * `try_*` methods return `Result<_, SdkError>` and make exactly one
//!   request (none when no API key is configured).
//! * The plain methods are total: a failure is logged with
//!   `tracing::warn!` and replaced by the value from [`crate::fallback`].
//!
//! No retries, no request timeout.

use std::sync::Arc;

use wf_models::{MessageInsight, NearbyPlaces, RouteStop, TrafficReport};

use crate::config::AssistantConfig;
use crate::error::SdkError;
use crate::wire::{Enabled, GenerateContentRequest, GenerateContentResponse, Tool};
use crate::{fallback, prompts, schema};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    config: Arc<AssistantConfig>,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("no API key configured, AI features will use fallback values");
        }
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, SdkError> {
        let key = self.config.api_key.as_deref().ok_or(SdkError::MissingApiKey)?;
        let url = self.config.generate_url(model);
        tracing::debug!(%url, "generateContent");

        let res = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, key)
            .json(request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SdkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn generate_text(&self, model: &str, request: &GenerateContentRequest) -> Result<String, SdkError> {
        self.generate(model, request)
            .await?
            .text()
            .ok_or(SdkError::EmptyResponse)
    }

    // ------------------------------------------------------------------
    // Fallible operations
    // ------------------------------------------------------------------

    /// Search-grounded traffic summary near `location`.
    pub async fn try_traffic_analysis(&self, location: &str) -> Result<TrafficReport, SdkError> {
        let request = GenerateContentRequest::prompt(prompts::traffic(location))
            .tool(Tool::GoogleSearch(Enabled {}))
            .json_schema(schema::traffic_report());
        let text = self.generate_text(&self.config.text_model, &request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Priority, sentiment and suggested action for a client message.
    pub async fn try_analyze_message(&self, message: &str) -> Result<MessageInsight, SdkError> {
        let request = GenerateContentRequest::prompt(prompts::triage(message))
            .json_schema(schema::message_insight());
        let text = self.generate_text(&self.config.text_model, &request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Short logistics tip for the stop sequence.
    pub async fn try_optimize_route(&self, stops: &[RouteStop]) -> Result<String, SdkError> {
        let request = GenerateContentRequest::prompt(prompts::route_advice(stops));
        self.generate_text(&self.config.text_model, &request).await
    }

    /// Client-facing arrival message for `stop`.
    pub async fn try_arrival_notification(&self, stop: &RouteStop) -> Result<String, SdkError> {
        let request = GenerateContentRequest::prompt(prompts::arrival(stop));
        self.generate_text(&self.config.text_model, &request).await
    }

    /// Maps-grounded search around a coordinate. An empty answer is not a
    /// failure.
    pub async fn try_nearby_places(&self, query: &str, lat: f64, lng: f64) -> Result<NearbyPlaces, SdkError> {
        let request = GenerateContentRequest::prompt(query)
            .tool(Tool::GoogleMaps(Enabled {}))
            .near(lat, lng);
        let response = self.generate(&self.config.maps_model, &request).await?;
        Ok(NearbyPlaces {
            text: response.text().unwrap_or_else(|| fallback::NO_RESULTS.to_string()),
            links: response.map_links(),
        })
    }

    // ------------------------------------------------------------------
    // Total operations
    // ------------------------------------------------------------------

    pub async fn traffic_analysis(&self, location: &str) -> TrafficReport {
        settle(
            "traffic_analysis",
            self.try_traffic_analysis(location).await,
            fallback::traffic_report,
        )
    }

    pub async fn analyze_message(&self, message: &str) -> MessageInsight {
        settle(
            "analyze_message",
            self.try_analyze_message(message).await,
            fallback::message_insight,
        )
    }

    pub async fn optimize_route(&self, stops: &[RouteStop]) -> String {
        settle(
            "optimize_route",
            self.try_optimize_route(stops).await,
            fallback::route_advice,
        )
    }

    pub async fn arrival_notification(&self, stop: &RouteStop) -> String {
        settle(
            "arrival_notification",
            self.try_arrival_notification(stop).await,
            || fallback::arrival_notification(stop),
        )
    }

    pub async fn nearby_places(&self, query: &str, lat: f64, lng: f64) -> NearbyPlaces {
        settle(
            "nearby_places",
            self.try_nearby_places(query, lat, lng).await,
            fallback::nearby_places,
        )
    }
}

fn settle<T>(operation: &'static str, result: Result<T, SdkError>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(SdkError::MissingApiKey) => {
            tracing::debug!(operation, "no API key, using fallback");
            fallback()
        }
        Err(e) => {
            tracing::warn!(operation, error = %e, "assistant call failed, using fallback");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_models::mock;

    fn offline() -> AssistantClient {
        AssistantClient::new(AssistantConfig::default())
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let client = offline();
        let err = client.try_optimize_route(&mock::route()).await.unwrap_err();
        assert!(matches!(err, SdkError::MissingApiKey));
    }

    #[tokio::test]
    async fn missing_key_yields_every_fallback() {
        let client = offline();
        let route = mock::route();
        assert_eq!(client.traffic_analysis("Florence").await, fallback::traffic_report());
        assert_eq!(client.analyze_message("hi").await, fallback::message_insight());
        assert_eq!(client.optimize_route(&route).await, fallback::ROUTE_ADVICE);
        assert_eq!(
            client.arrival_notification(&route[2]).await,
            fallback::arrival_notification(&route[2])
        );
        assert_eq!(client.nearby_places("fuel", 43.0, 11.0).await, fallback::nearby_places());
    }

    #[test]
    fn clones_share_config() {
        let a = AssistantClient::new(AssistantConfig::with_endpoint("http://localhost:1", "k"));
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.config, &b.config));
    }
}
